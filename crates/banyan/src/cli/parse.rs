//! `banyan parse` command implementation.

use std::path::Path;
use std::time::Instant;

use banyan::{named_node_count, parse_file, to_sexp};
use colored::Colorize;

const MAX_DISPLAY_ISSUES: usize = 10;

/// Run the parse command.
///
/// Returns `Ok(true)` — a file that parses at all counts as success; syntax
/// issues are reported, not fatal.
pub fn run(file: &Path, sexp: bool) -> Result<bool, banyan::Error> {
    let start = Instant::now();
    let syntax = parse_file(file)?;
    let duration = start.elapsed();

    println!(
        "{} {} ({})",
        "Parsed".green().bold(),
        file.display(),
        syntax.language.display_name()
    );
    println!(
        "{}: {} named nodes in {:.2?}",
        "Tree".cyan(),
        named_node_count(&syntax.tree),
        duration
    );

    if !syntax.issues.is_empty() {
        println!();
        println!(
            "{} ({}):",
            "Syntax issues".yellow().bold(),
            syntax.issues.len()
        );
        for issue in syntax.issues.iter().take(MAX_DISPLAY_ISSUES) {
            println!("  {} {issue}", "•".yellow());
        }
        if syntax.issues.len() > MAX_DISPLAY_ISSUES {
            println!(
                "  ... and {} more",
                syntax.issues.len() - MAX_DISPLAY_ISSUES
            );
        }
    }

    if sexp {
        println!();
        println!("{}", to_sexp(&syntax.tree));
    }

    Ok(true)
}
