//! Parsing and syntax inspection over pooled handles.
//!
//! This is the surface most callers use: hand in source text or a path, get
//! back a concrete syntax tree plus any `ERROR`/`MISSING` nodes the engine's
//! error recovery produced. All parsing goes through the process-wide pool,
//! so the first parse of a language pays for handle construction and every
//! later parse reuses it.

// Tree-sitter returns usize for positions, but we report u32 for compactness.
// This is safe for practical source files (no file has 4 billion lines).
#![allow(clippy::cast_possible_truncation)]

use std::fmt;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};
use crate::parser::pool;
use crate::types::Language;

/// Result of parsing a file from disk.
#[derive(Debug)]
pub struct FileSyntax {
    /// Language detected from the file extension.
    pub language: Language,
    /// Concrete syntax tree.
    pub tree: tree_sitter::Tree,
    /// `ERROR` and `MISSING` nodes found in the tree.
    pub issues: Vec<SyntaxIssue>,
}

/// A syntax problem located in a parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// Line of the problem node (1-indexed).
    pub line: u32,
    /// Column of the problem node (1-indexed).
    pub column: u32,
    /// Node kind: `"ERROR"` for error nodes, the expected kind for missing
    /// nodes.
    pub kind: String,
    /// Whether this is a zero-width node inserted by error recovery.
    pub missing: bool,
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing {
            write!(f, "{}:{}: missing {}", self.line, self.column, self.kind)
        } else {
            write!(f, "{}:{}: syntax error", self.line, self.column)
        }
    }
}

/// Parse source text with the pooled handle for `language`.
///
/// # Errors
///
/// Returns [`Error::Initialization`] if the handle cannot be constructed, or
/// [`Error::Parse`] if the engine produces no tree.
pub fn parse_source(language: Language, source: &str) -> Result<tree_sitter::Tree> {
    let tree = pool().with_parser(language, |parser| parser.parse(source, None))?;
    tree.ok_or(Error::Parse { language })
}

/// Parse a file from disk, detecting its language from the extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFile`] for unknown extensions,
/// [`Error::Io`] if the file cannot be read, [`Error::Encoding`] for
/// non-UTF-8 content, and any error from [`parse_source`].
pub fn parse_file(path: &Path) -> Result<FileSyntax> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let Some(language) = Language::from_extension(ext) else {
        return Err(Error::UnsupportedFile {
            path: path.to_path_buf(),
        });
    };

    let content = std::fs::read(path)?;
    let source = std::str::from_utf8(&content).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })?;

    let tree = parse_source(language, source)?;
    let issues = syntax_issues(&tree);
    trace!(
        path = %path.display(),
        language = %language,
        issues = issues.len(),
        "parsed file"
    );

    Ok(FileSyntax {
        language,
        tree,
        issues,
    })
}

/// Collect `ERROR` and `MISSING` nodes from a parse tree.
///
/// Positions are converted from tree-sitter's 0-indexed rows and columns to
/// 1-indexed lines and columns. Only the outermost node of a nested error
/// region is reported.
#[must_use]
pub fn syntax_issues(tree: &tree_sitter::Tree) -> Vec<SyntaxIssue> {
    let mut issues = Vec::new();
    collect_issues(tree.root_node(), &mut issues);
    issues
}

fn collect_issues(node: tree_sitter::Node<'_>, issues: &mut Vec<SyntaxIssue>) {
    if node.is_error() || node.is_missing() {
        issues.push(SyntaxIssue {
            line: node.start_position().row as u32 + 1,
            column: node.start_position().column as u32 + 1,
            kind: node.kind().to_string(),
            missing: node.is_missing(),
        });
        return;
    }
    // has_error() is set on every ancestor of an error; clean subtrees are
    // skipped without a walk
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_issues(child, issues);
    }
}

/// Count named nodes in a parse tree.
#[must_use]
pub fn named_node_count(tree: &tree_sitter::Tree) -> usize {
    count_named(tree.root_node())
}

fn count_named(node: tree_sitter::Node<'_>) -> usize {
    let mut cursor = node.walk();
    let children: usize = node.children(&mut cursor).map(count_named).sum();
    children + usize::from(node.is_named())
}

/// Render a tree's root as an s-expression.
#[must_use]
pub fn to_sexp(tree: &tree_sitter::Tree) -> String {
    tree.root_node().to_sexp()
}
