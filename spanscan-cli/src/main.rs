//! Spanscan CLI - find string literals and comments in source files.
//!
//! This is the main entry point for the spanscan CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::traits::CommandDescription;
use commands::{run_annotate, run_languages, AnnotateArgs, AnnotateCommand, LanguagesCommand};
use config::Config;
use error::{Result, SpanscanError};

/// Spanscan - find string literals and comments in source files
///
/// Spanscan reports the exact ranges of strings and comments for many
/// languages, and for custom languages defined in `spanscan.toml`.
#[derive(Parser, Debug)]
#[command(name = "spanscan")]
#[command(author = "Spanscan Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find string literals and comments in source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SPANSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SPANSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SPANSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the spanscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = AnnotateCommand::description(), long_about = AnnotateCommand::help())]
    Annotate(AnnotateCommandArgs),

    #[command(about = LanguagesCommand::description(), long_about = LanguagesCommand::help())]
    Languages,
}

/// Arguments for the annotate subcommand.
#[derive(Parser, Debug)]
struct AnnotateCommandArgs {
    /// Files to annotate
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Language of the files (default: detected from each file's extension)
    #[arg(short, long)]
    language: Option<String>,

    /// Language family, used when the language itself is unknown
    #[arg(long)]
    family: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the spanscan CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that results on stdout stay machine-readable.
/// `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SpanscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Annotate(args) => execute_annotate(args, config),
        Commands::Languages => run_languages(config),
    }
}

/// Execute the annotate command.
fn execute_annotate(args: AnnotateCommandArgs, config: Config) -> Result<()> {
    let annotate_args = AnnotateArgs {
        files: args.files,
        language: args.language,
        family: args.family,
        format: args.format,
    };
    run_annotate(annotate_args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_annotate() {
        let cli = Cli::parse_from(["spanscan", "annotate", "a.py"]);
        if let Commands::Annotate(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.py")]);
            assert!(args.language.is_none());
            assert!(args.format.is_none());
        } else {
            panic!("Expected Annotate command");
        }
    }

    #[test]
    fn test_cli_parse_annotate_requires_files() {
        assert!(Cli::try_parse_from(["spanscan", "annotate"]).is_err());
    }

    #[test]
    fn test_cli_parse_annotate_with_language() {
        let cli = Cli::parse_from([
            "spanscan", "annotate", "x", "--language", "python3", "--family", "python",
        ]);
        if let Commands::Annotate(args) = cli.command {
            assert_eq!(args.language.as_deref(), Some("python3"));
            assert_eq!(args.family.as_deref(), Some("python"));
        } else {
            panic!("Expected Annotate command");
        }
    }

    #[test]
    fn test_cli_parse_annotate_with_format() {
        let cli = Cli::parse_from(["spanscan", "annotate", "a.c", "--format", "json"]);
        if let Commands::Annotate(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Annotate command");
        }
    }

    #[test]
    fn test_cli_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["spanscan", "annotate", "a.c", "-F", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_languages() {
        let cli = Cli::parse_from(["spanscan", "languages"]);
        assert!(matches!(cli.command, Commands::Languages));
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["spanscan", "--verbose", "languages"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["spanscan", "languages", "--config", "/path/to/spanscan.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/spanscan.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["spanscan", "--no-color", "languages"]);
        assert!(cli.no_color);
    }
}
