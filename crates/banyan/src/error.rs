//! Error types for Banyan operations.
//!
//! ## Error Philosophy
//!
//! Banyan never recovers on behalf of the caller:
//!
//! - A handle that cannot be constructed surfaces as [`InitializationError`],
//!   unchanged — the caller decides whether to retry, fall back to another
//!   language, or abort. Nothing is cached on failure.
//! - File-level problems (`unknown extension`, `bad encoding`) are reported
//!   per file so batch consumers can continue with the rest.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Language;

/// Result type for Banyan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Banyan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A parser handle could not be allocated or bound to its grammar
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The engine produced no tree for the input
    #[error("parser returned no tree for {language}")]
    Parse {
        /// Language whose handle was parsing
        language: Language,
    },

    /// File extension is not in the language registry
    #[error("unsupported file extension: {shown}", shown = .path.display())]
    UnsupportedFile {
        /// File that could not be matched to a language
        path: PathBuf,
    },

    /// File content is not valid UTF-8
    #[error("file is not valid UTF-8: {shown}", shown = .path.display())]
    Encoding {
        /// File with undecodable content
        path: PathBuf,
    },

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to allocate a parser handle or bind a grammar to it.
///
/// Produced on the first access to a language's pool slot when the
/// tree-sitter runtime rejects the grammar — in practice a grammar compiled
/// against an ABI version outside the linked runtime's supported range.
/// The slot stays empty, so a later access is permitted to retry.
#[derive(Debug, Clone, Error)]
#[error("failed to initialize {language} parser: {message}")]
pub struct InitializationError {
    /// Language whose handle could not be constructed.
    pub language: Language,
    /// Detail reported by the tree-sitter runtime.
    pub message: String,
}

impl InitializationError {
    /// Create a new initialization error.
    #[must_use]
    pub fn new(language: Language, message: impl Into<String>) -> Self {
        Self {
            language,
            message: message.into(),
        }
    }
}
