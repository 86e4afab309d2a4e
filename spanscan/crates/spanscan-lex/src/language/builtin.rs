//! Built-in language definitions.
//!
//! Each entry lists a canonical name, its aliases, the file extensions it is
//! detected from, and its four delimiter collections.

use crate::delimiters::{DelimiterTable, DelimiterTableBuilder};

/// A static language definition
pub(crate) struct LanguageDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub strings: &'static [(&'static str, &'static str)],
    pub multiline_strings: &'static [(&'static str, &'static str)],
    pub multiline_comments: &'static [(&'static str, &'static str)],
    pub comments: &'static [&'static str],
}

impl LanguageDef {
    pub(crate) fn builder(&self) -> DelimiterTableBuilder {
        let mut builder = DelimiterTable::builder();
        for &(start, end) in self.strings {
            builder = builder.string(start, end);
        }
        for &(start, end) in self.multiline_strings {
            builder = builder.multiline_string(start, end);
        }
        for &(start, end) in self.multiline_comments {
            builder = builder.multiline_comment(start, end);
        }
        for &marker in self.comments {
            builder = builder.comment(marker);
        }
        builder
    }

    pub(crate) fn table(&self) -> DelimiterTable {
        self.builder().assemble()
    }
}

const QUOTES: &[(&str, &str)] = &[("\"", "\""), ("'", "'")];
const DOUBLE_QUOTE: &[(&str, &str)] = &[("\"", "\"")];
const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const TRIPLE_QUOTES: &[(&str, &str)] = &[("\"\"\"", "\"\"\""), ("'''", "'''")];
const SGML_COMMENT: &[(&str, &str)] = &[("<!--", "-->")];

pub(crate) const BUILTIN_LANGUAGES: &[LanguageDef] = &[
    LanguageDef {
        name: "python",
        aliases: &["python3", "python2", "py"],
        extensions: &["py", "pyw", "pyi"],
        strings: QUOTES,
        multiline_strings: TRIPLE_QUOTES,
        multiline_comments: &[],
        comments: &["#"],
    },
    LanguageDef {
        name: "c",
        aliases: &[],
        extensions: &["c", "h"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "cpp",
        aliases: &["c++", "cxx"],
        extensions: &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
        strings: QUOTES,
        multiline_strings: &[("R\"(", ")\"")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "csharp",
        aliases: &["c#", "cs"],
        extensions: &["cs"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "java",
        aliases: &[],
        extensions: &["java"],
        strings: QUOTES,
        multiline_strings: &[("\"\"\"", "\"\"\"")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "javascript",
        aliases: &["js", "node"],
        extensions: &["js", "mjs", "cjs", "jsx"],
        strings: QUOTES,
        multiline_strings: &[("`", "`")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "typescript",
        aliases: &["ts"],
        extensions: &["ts", "tsx", "mts", "cts"],
        strings: QUOTES,
        multiline_strings: &[("`", "`")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "rust",
        aliases: &["rs"],
        extensions: &["rs"],
        strings: DOUBLE_QUOTE,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "go",
        aliases: &["golang"],
        extensions: &["go"],
        strings: QUOTES,
        multiline_strings: &[("`", "`")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "ruby",
        aliases: &["rb"],
        extensions: &["rb", "rake", "gemspec"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: &[("=begin", "=end")],
        comments: &["#"],
    },
    LanguageDef {
        name: "shell",
        aliases: &["sh", "bash", "zsh"],
        extensions: &["sh", "bash", "zsh"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: &[],
        comments: &["#"],
    },
    LanguageDef {
        name: "perl",
        aliases: &["pl"],
        extensions: &["pl", "pm"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: &[],
        comments: &["#"],
    },
    LanguageDef {
        name: "lua",
        aliases: &[],
        extensions: &["lua"],
        strings: QUOTES,
        multiline_strings: &[("[[", "]]")],
        multiline_comments: &[("--[[", "]]")],
        comments: &["--"],
    },
    LanguageDef {
        name: "sql",
        aliases: &[],
        extensions: &["sql"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &["--"],
    },
    LanguageDef {
        name: "haskell",
        aliases: &["hs"],
        extensions: &["hs", "lhs"],
        strings: DOUBLE_QUOTE,
        multiline_strings: &[],
        multiline_comments: &[("{-", "-}")],
        comments: &["--"],
    },
    LanguageDef {
        name: "html",
        aliases: &["htm"],
        extensions: &["html", "htm"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: SGML_COMMENT,
        comments: &[],
    },
    LanguageDef {
        name: "xml",
        aliases: &[],
        extensions: &["xml", "svg", "xsd", "xsl"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: SGML_COMMENT,
        comments: &[],
    },
    LanguageDef {
        name: "css",
        aliases: &[],
        extensions: &["css"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &[],
    },
    LanguageDef {
        name: "yaml",
        aliases: &["yml"],
        extensions: &["yaml", "yml"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: &[],
        comments: &["#"],
    },
    LanguageDef {
        name: "toml",
        aliases: &[],
        extensions: &["toml"],
        strings: QUOTES,
        multiline_strings: TRIPLE_QUOTES,
        multiline_comments: &[],
        comments: &["#"],
    },
    LanguageDef {
        name: "php",
        aliases: &[],
        extensions: &["php"],
        strings: QUOTES,
        multiline_strings: &[],
        multiline_comments: C_BLOCK,
        comments: &["//", "#"],
    },
    LanguageDef {
        name: "swift",
        aliases: &[],
        extensions: &["swift"],
        strings: DOUBLE_QUOTE,
        multiline_strings: &[("\"\"\"", "\"\"\"")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
    LanguageDef {
        name: "kotlin",
        aliases: &["kt"],
        extensions: &["kt", "kts"],
        strings: QUOTES,
        multiline_strings: &[("\"\"\"", "\"\"\"")],
        multiline_comments: C_BLOCK,
        comments: &["//"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        for def in BUILTIN_LANGUAGES {
            assert!(def.builder().build().is_ok(), "{} has an empty marker", def.name);
        }
    }

    #[test]
    fn test_builtin_names_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in BUILTIN_LANGUAGES {
            assert_eq!(def.name, def.name.to_lowercase());
            assert!(seen.insert(def.name), "duplicate language {}", def.name);
            for alias in def.aliases {
                assert!(seen.insert(*alias), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn test_python_table() {
        let table = BUILTIN_LANGUAGES[0].table();
        assert_eq!(table.string_like_pairs().len(), 4);
        assert!(table.comment_delimiters().contains("#"));
        assert!(table.multiline_comment_delimiters().is_empty());
    }
}
