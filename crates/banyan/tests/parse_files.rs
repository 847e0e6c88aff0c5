//! Integration tests for the file parse surface.
//!
//! Tests language detection from extensions, the error paths for files that
//! cannot be parsed at all, and per-language smoke parses through the pool.

use std::fs;
use std::path::{Path, PathBuf};

use banyan::{parse_file, parse_source, Error, Language};
use rstest::rstest;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir.
fn file_with_content(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("should write file");
    (dir, path)
}

// === Language detection ===

#[test]
fn java_file_is_detected_and_parses_cleanly() {
    let (_dir, path) = file_with_content("Main.java", b"class Main { void run() {} }");

    let syntax = parse_file(&path).expect("parse should succeed");

    assert_eq!(syntax.language, Language::Java);
    assert!(syntax.issues.is_empty());
}

#[test]
fn extension_matching_is_case_insensitive() {
    let (_dir, path) = file_with_content("MAIN.RS", b"fn main() {}");

    let syntax = parse_file(&path).expect("parse should succeed");

    assert_eq!(syntax.language, Language::Rust);
}

// === Error paths ===

#[test]
fn unknown_extension_is_rejected() {
    let (_dir, path) = file_with_content("notes.txt", b"hello");

    let error = parse_file(&path).expect_err("txt should be unsupported");

    assert!(matches!(error, Error::UnsupportedFile { .. }));
}

#[test]
fn extensionless_file_is_rejected() {
    let (_dir, path) = file_with_content("Makefile", b"all:\n");

    let error = parse_file(&path).expect_err("no extension should be unsupported");

    assert!(matches!(error, Error::UnsupportedFile { .. }));
}

#[test]
fn non_utf8_content_is_an_encoding_error() {
    let (_dir, path) = file_with_content("data.rs", &[0xff, 0xfe, 0x00, 0x41]);

    let error = parse_file(&path).expect_err("invalid UTF-8 should fail");

    assert!(matches!(error, Error::Encoding { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("missing.rs");

    let error = parse_file(&path).expect_err("missing file should fail");

    assert!(matches!(error, Error::Io(_)));
}

// === Malformed input ===

#[test]
fn malformed_file_parses_with_issues_instead_of_failing() {
    let malformed = b"class Broken {\n  void incomplete(\n";
    let (_dir, path) = file_with_content("Broken.java", malformed);

    let syntax = parse_file(&path).expect("malformed files still parse");

    assert_eq!(syntax.language, Language::Java);
    assert!(
        !syntax.issues.is_empty(),
        "truncated input should produce issues"
    );
}

#[test]
fn empty_file_parses_with_zero_issues() {
    let (_dir, path) = file_with_content("empty.py", b"");

    let syntax = parse_file(&path).expect("empty file should parse");

    assert!(syntax.issues.is_empty());
}

// === Per-language smoke parses ===

#[rstest]
#[case::rust(Language::Rust, "fn main() {}\n")]
#[case::csharp(Language::CSharp, "class A { void M() {} }\n")]
#[case::java(Language::Java, "class A { void m() {} }\n")]
#[case::python(Language::Python, "def f():\n    return 1\n")]
#[case::javascript(Language::JavaScript, "function f() { return 1; }\n")]
#[case::typescript(Language::TypeScript, "const x: number = 1;\n")]
#[case::go(Language::Go, "package main\n\nfunc main() {}\n")]
#[case::c(Language::C, "int main(void) { return 0; }\n")]
fn well_formed_source_parses_cleanly(#[case] language: Language, #[case] source: &str) {
    let tree = parse_source(language, source).expect("parse should succeed");

    assert!(
        !tree.root_node().has_error(),
        "{language} rejected: {source}"
    );
}

#[test]
fn parse_file_accepts_relative_and_absolute_paths() {
    let (_dir, path) = file_with_content("abs.go", b"package main\n");

    let absolute = parse_file(&path).expect("absolute path should parse");
    assert_eq!(absolute.language, Language::Go);

    // Unsupported check is path-shape independent
    let error = parse_file(Path::new("relative.unknown")).expect_err("unknown extension");
    assert!(matches!(error, Error::UnsupportedFile { .. }));
}
