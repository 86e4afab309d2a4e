//! Languages command implementation.
//!
//! Lists every registered language with its aliases, built-in and custom.

use std::io::Write;

use spanscan_lex::LanguageRegistry;

use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Languages command handler.
pub struct LanguagesCommand {
    config: Config,
}

impl LanguagesCommand {
    /// Execute the command, writing one language per line to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let registry = self.config.registry()?;
        write_languages(&registry, out)
    }
}

fn write_languages(registry: &LanguageRegistry, out: &mut impl Write) -> Result<()> {
    for name in registry.names() {
        let aliases = registry.aliases_of(name);
        if aliases.is_empty() {
            writeln!(out, "{}", name)?;
        } else {
            writeln!(out, "{} ({})", name, aliases.join(", "))?;
        }
    }
    Ok(())
}

impl Command for LanguagesCommand {
    type Args = ();
    type Output = ();

    fn new(_args: Self::Args, config: Config) -> Self {
        Self { config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "languages"
    }
}

impl CommandDescription for LanguagesCommand {
    fn description() -> &'static str {
        "List the known languages"
    }

    fn help() -> &'static str {
        "Lists every language that can be passed to --language, with its \
         aliases. Languages defined in the configuration file are included."
    }
}

/// Run the languages command.
pub fn run_languages(config: Config) -> Result<()> {
    LanguagesCommand::new((), config).execute()
}
