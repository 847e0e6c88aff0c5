//! # Banyan: Lazy Multi-Language Parser Pool
//!
//! Banyan owns ready-to-use tree-sitter parser handles for a fixed set of
//! languages. A handle is allocated by the engine and bound to exactly one
//! pre-compiled grammar; Banyan constructs each language's handle lazily on
//! first use and shares it process-wide, so callers never manage
//! construction timing.
//!
//! ## Design Philosophy
//!
//! - **Handles are pooled, not per-call** - the engine's allocate and bind
//!   primitives run at most once per language
//! - **Construction is lazy** - a process that never parses Java never pays
//!   for a Java handle
//! - **Failures are not cached** - a failed construction propagates
//!   unchanged and leaves the slot empty; the next access retries
//! - **Embeddable** - library first, CLI second
//!
//! ## Quick Start
//!
//! ```
//! use banyan::{parse_source, Language};
//!
//! let tree = parse_source(Language::Java, "class A {}")?;
//! assert!(!tree.root_node().has_error());
//!
//! // Same handle, no re-construction
//! let again = parse_source(Language::Java, "class B {}")?;
//! assert!(!again.root_node().has_error());
//! # Ok::<(), banyan::Error>(())
//! ```

mod error;
mod grammar;
mod parser;
mod syntax;
mod types;

pub use error::{Error, InitializationError, Result};
pub use grammar::grammar_for;
pub use parser::{pool, LazyParser, ParserPool};
pub use syntax::{
    named_node_count, parse_file, parse_source, syntax_issues, to_sexp, FileSyntax, SyntaxIssue,
};
pub use types::Language;
