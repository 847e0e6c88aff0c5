//! Grammar bindings for supported languages.
//!
//! Each language maps to the pre-compiled grammar table exported by its
//! grammar crate. Grammars are opaque capabilities consumed by the engine;
//! Banyan never interprets their contents.

use crate::types::Language;

/// Get the tree-sitter grammar for a language.
#[must_use]
pub fn grammar_for(language: Language) -> tree_sitter::Language {
    match language {
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Go => tree_sitter_go::LANGUAGE.into(),
        Language::C => tree_sitter_c::LANGUAGE.into(),
    }
}
