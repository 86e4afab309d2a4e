//! Language registry.
//!
//! Maps language names, aliases and file extensions to [`DelimiterTable`]s.
//! Lookups are case-insensitive. A registry starts either empty or with the
//! built-in definitions, and custom definitions can be registered on top.
//!
//! # Examples
//!
//! ```
//! use spanscan_lex::LanguageRegistry;
//!
//! let registry = LanguageRegistry::with_builtins();
//! let table = registry.resolve("Python3", "python").unwrap();
//! assert!(table.comment_delimiters().contains("#"));
//! assert!(registry.resolve("cobol", "cobol").is_err());
//! ```

mod builtin;

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::delimiters::DelimiterTable;
use crate::error::{LanguageError, LanguageResult};

use builtin::BUILTIN_LANGUAGES;

/// Registry of delimiter tables keyed by language name
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    /// Canonical name to table
    tables: FxHashMap<String, Arc<DelimiterTable>>,
    /// Alias to canonical name
    aliases: FxHashMap<String, String>,
    /// File extension (without dot) to language name
    extensions: FxHashMap<String, String>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in language definitions
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for def in BUILTIN_LANGUAGES {
            registry.register(def.name, def.table());
            for alias in def.aliases {
                registry.alias(alias, def.name);
            }
            for extension in def.extensions {
                registry.register_extension(extension, def.name);
            }
        }
        registry
    }

    /// Add or replace the definition of a language
    ///
    /// Registering a name that is currently an alias turns it into a
    /// language of its own.
    pub fn register(&mut self, name: &str, table: DelimiterTable) {
        let name = normalize(name);
        self.aliases.remove(&name);
        if self.tables.insert(name.clone(), Arc::new(table)).is_some() {
            debug!(language = %name, "replaced language definition");
        }
    }

    /// Make `alias` resolve to the language `canonical`
    pub fn alias(&mut self, alias: &str, canonical: &str) {
        self.aliases.insert(normalize(alias), normalize(canonical));
    }

    /// Map a file extension (with or without leading dot) to a language
    pub fn register_extension(&mut self, extension: &str, language: &str) {
        let extension = normalize(extension.trim_start_matches('.'));
        self.extensions.insert(extension, normalize(language));
    }

    /// Look up a language by name or alias
    pub fn get(&self, name: &str) -> Option<Arc<DelimiterTable>> {
        let name = normalize(name);
        let canonical = self.aliases.get(&name).unwrap_or(&name);
        self.tables.get(canonical).cloned()
    }

    /// Returns true if `name` resolves to a definition
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve the table for a language, falling back to its family
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::UnknownLanguage`] if neither name resolves.
    pub fn resolve(&self, language: &str, family: &str) -> LanguageResult<Arc<DelimiterTable>> {
        self.get(language)
            .or_else(|| self.get(family))
            .ok_or_else(|| LanguageError::UnknownLanguage {
                language: language.to_string(),
                family: family.to_string(),
            })
    }

    /// Guess the language of a file from its extension
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use spanscan_lex::LanguageRegistry;
    ///
    /// let registry = LanguageRegistry::with_builtins();
    /// assert_eq!(registry.language_for_path(Path::new("src/main.C")), Some("c"));
    /// assert_eq!(registry.language_for_path(Path::new("README")), None);
    /// ```
    pub fn language_for_path(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.extensions
            .get(&normalize(extension))
            .map(String::as_str)
    }

    /// Canonical names of all registered languages, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aliases pointing at `name`, sorted
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let name = normalize(name);
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, canonical)| **canonical == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no language is registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = LanguageRegistry::with_builtins();
        assert_eq!(registry.len(), BUILTIN_LANGUAGES.len());
        assert!(registry.contains("python"));
        assert!(registry.contains("C"));
        assert!(registry.contains("  javascript "));
    }

    #[test]
    fn test_aliases_resolve() {
        let registry = LanguageRegistry::with_builtins();
        let python = registry.get("python").unwrap();
        assert_eq!(registry.get("python3").unwrap(), python);
        assert_eq!(registry.get("PY").unwrap(), python);
        assert_eq!(registry.get("c++"), registry.get("cpp"));
        assert_eq!(registry.aliases_of("shell"), ["bash", "sh", "zsh"]);
    }

    #[test]
    fn test_resolve_falls_back_to_family() {
        let registry = LanguageRegistry::with_builtins();
        let table = registry.resolve("python3.12", "python").unwrap();
        assert_eq!(table, registry.get("python").unwrap());
    }

    #[test]
    fn test_resolve_prefers_language() {
        let registry = LanguageRegistry::with_builtins();
        let table = registry.resolve("cpp", "c").unwrap();
        assert!(table.string_like_pairs().contains_key("R\"("));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = LanguageRegistry::with_builtins();
        let err = registry.resolve("cobol85", "cobol").unwrap_err();
        assert_eq!(
            err,
            LanguageError::UnknownLanguage {
                language: "cobol85".to_string(),
                family: "cobol".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = LanguageRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("python", "python").is_err());
    }

    #[test]
    fn test_register_custom() {
        let mut registry = LanguageRegistry::with_builtins();
        let table = DelimiterTable::builder()
            .quote("\"")
            .comment(";")
            .build()
            .unwrap();
        registry.register("Lisp", table.clone());
        registry.register_extension(".lisp", "lisp");

        assert_eq!(*registry.get("lisp").unwrap(), table);
        assert_eq!(
            registry.language_for_path(Path::new("init.lisp")),
            Some("lisp")
        );
        assert!(registry.names().contains(&"lisp"));
    }

    #[test]
    fn test_register_over_alias() {
        let mut registry = LanguageRegistry::with_builtins();
        let table = DelimiterTable::builder().comment("#").build().unwrap();
        registry.register("py", table.clone());

        assert_eq!(*registry.get("py").unwrap(), table);
        assert_ne!(registry.get("python").unwrap(), registry.get("py").unwrap());
    }

    #[test]
    fn test_names_sorted() {
        let registry = LanguageRegistry::with_builtins();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
