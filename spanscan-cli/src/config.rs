//! Configuration module for the spanscan CLI.
//!
//! This module handles loading and validating the `spanscan.toml`
//! configuration, including custom language definitions.
//!
//! ```toml
//! default_format = "json"
//! jobs = 4
//!
//! [extensions]
//! lisp = "lisp"
//!
//! [languages.lisp]
//! string_delimiters = { '"' = '"' }
//! comment_delimiters = [";"]
//! ```

use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use indexmap::IndexMap;
use num_cpus::get as get_num_cpus;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use spanscan_lex::{DelimiterTable, LanguageRegistry};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{Result, SpanscanError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "spanscan.toml";

type OrderedMap<V> = IndexMap<String, V, BuildHasherDefault<FxHasher>>;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Number of files annotated in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Extra file extensions, mapped to language names.
    #[serde(default)]
    pub extensions: OrderedMap<String>,

    /// Custom language definitions, added to or replacing the built-ins.
    #[serde(default)]
    pub languages: OrderedMap<LanguageConfig>,
}

/// Delimiters of a custom language.
///
/// Pair tables map start markers to end markers and keep the order in which
/// they appear in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// Single-line string delimiters.
    #[serde(default)]
    pub string_delimiters: OrderedMap<String>,

    /// Multi-line string delimiters.
    #[serde(default)]
    pub multiline_string_delimiters: OrderedMap<String>,

    /// Multi-line comment delimiters.
    #[serde(default)]
    pub multiline_comment_delimiters: OrderedMap<String>,

    /// Line-comment markers.
    #[serde(default)]
    pub comment_delimiters: Vec<String>,
}

impl LanguageConfig {
    /// Build and validate the delimiter table of this language.
    pub fn table(&self) -> spanscan_lex::LanguageResult<DelimiterTable> {
        let mut builder = DelimiterTable::builder();
        for (start, end) in &self.string_delimiters {
            builder = builder.string(start.as_str(), end.as_str());
        }
        for (start, end) in &self.multiline_string_delimiters {
            builder = builder.multiline_string(start.as_str(), end.as_str());
        }
        for (start, end) in &self.multiline_comment_delimiters {
            builder = builder.multiline_comment(start.as_str(), end.as_str());
        }
        for marker in &self.comment_delimiters {
            builder = builder.comment(marker.as_str());
        }
        builder.build()
    }
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            jobs: default_parallel_jobs(),
            extensions: OrderedMap::default(),
            languages: OrderedMap::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/spanscan/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpanscanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            SpanscanError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings and custom language definitions.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(SpanscanError::Config(
                "jobs must be at least 1".to_string(),
            ));
        }

        for (name, language) in &self.languages {
            language.table().map_err(|e| {
                SpanscanError::Config(format!("Invalid language `{}`: {}", name, e))
            })?;
        }
        Ok(())
    }

    /// Build the language registry: built-ins plus custom definitions.
    pub fn registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::with_builtins();

        for (name, language) in &self.languages {
            let table = language.table()?;
            registry.register(name, table);
        }
        for (extension, language) in &self.extensions {
            registry.register_extension(extension, language);
        }

        Ok(registry)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("spanscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("spanscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
