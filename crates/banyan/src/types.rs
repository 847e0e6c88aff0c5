//! Core language registry types.
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Language | Enum not String | Type-safe; adding a language requires a grammar binding |
//! | Registry order | `Language::ALL` | One canonical iteration order for pool slots and display |
//! | Serialization | lowercase names | Matches grammar-crate naming and the CLI's JSON output |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages.
///
/// Each variant maps to exactly one pre-compiled grammar; the mapping lives
/// in [`crate::grammar`]. This enum ensures we only claim to support
/// languages we actually ship a grammar for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Rust source files (`.rs`)
    Rust,
    /// C# source files (`.cs`)
    CSharp,
    /// Java source files (`.java`)
    Java,
    /// Python source files (`.py`, `.pyi`, `.pyw`)
    Python,
    /// JavaScript source files (`.js`, `.mjs`, `.cjs`, `.jsx`)
    JavaScript,
    /// TypeScript source files (`.ts`, `.mts`, `.cts`)
    TypeScript,
    /// Go source files (`.go`)
    Go,
    /// C source files (`.c`, `.h`)
    C,
}

impl Language {
    /// Every supported language, in registry order.
    ///
    /// The pool allocates one slot per entry; slot lookup relies on this
    /// order matching the enum's discriminant order.
    pub const ALL: [Self; 8] = [
        Self::Rust,
        Self::CSharp,
        Self::Java,
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Go,
        Self::C,
    ];

    /// File extensions handled by this language.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Rust => &["rs"],
            Self::CSharp => &["cs"],
            Self::Java => &["java"],
            Self::Python => &["py", "pyi", "pyw"],
            Self::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Self::TypeScript => &["ts", "mts", "cts"],
            Self::Go => &["go"],
            Self::C => &["c", "h"],
        }
    }

    /// Detect language from a file extension.
    ///
    /// Matching is case-insensitive.
    ///
    /// # Returns
    ///
    /// `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.extensions().contains(&ext.as_str()))
    }

    /// Look up a language by its registry name (e.g. `"java"`, `"csharp"`).
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == name)
    }

    /// Registry name; also the serialized representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::CSharp => "csharp",
            Self::Java => "java",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Go => "go",
            Self::C => "c",
        }
    }

    /// Human-readable name for display output.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::CSharp => "C#",
            Self::Java => "Java",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Go => "Go",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_order_matches_discriminants() {
        for (index, language) in Language::ALL.into_iter().enumerate() {
            assert_eq!(language as usize, index);
        }
    }

    #[test]
    fn every_language_has_extensions() {
        for language in Language::ALL {
            assert!(
                !language.extensions().is_empty(),
                "{language} has no extensions"
            );
        }
    }

    #[test]
    fn extensions_are_unique_across_languages() {
        let mut seen = HashSet::new();
        for language in Language::ALL {
            for ext in language.extensions() {
                assert!(seen.insert(*ext), "extension {ext} claimed twice");
            }
        }
    }

    #[test]
    fn from_extension_round_trips() {
        for language in Language::ALL {
            for ext in language.extensions() {
                assert_eq!(Language::from_extension(ext), Some(language));
            }
        }
    }

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(Language::from_extension("RS"), Some(Language::Rust));
        assert_eq!(Language::from_extension("Java"), Some(Language::Java));
    }

    #[test]
    fn from_extension_rejects_unknown() {
        assert_eq!(Language::from_extension("html"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn from_name_round_trips() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.as_str()), Some(language));
        }
    }

    #[test]
    fn serde_uses_registry_names() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let back: Language = serde_json::from_str("\"typescript\"").unwrap();
        assert_eq!(back, Language::TypeScript);
    }
}
