//! `banyan check` command implementation.

use std::path::PathBuf;

use banyan::parse_file;
use colored::Colorize;

/// Run the check command.
///
/// Each file is parsed independently; one bad file does not stop the rest.
/// Returns `Ok(true)` only if every file parsed without syntax issues.
pub fn run(files: &[PathBuf]) -> Result<bool, banyan::Error> {
    let mut clean = true;

    for file in files {
        match parse_file(file) {
            Ok(syntax) if syntax.issues.is_empty() => {
                println!(
                    "{} {} ({})",
                    "ok".green().bold(),
                    file.display(),
                    syntax.language
                );
            }
            Ok(syntax) => {
                clean = false;
                println!(
                    "{} {} ({}, {} issues)",
                    "issues".yellow().bold(),
                    file.display(),
                    syntax.language,
                    syntax.issues.len()
                );
                for issue in &syntax.issues {
                    println!("    {} {issue}", "•".dimmed());
                }
            }
            Err(e) => {
                clean = false;
                println!("{} {}: {e}", "failed".red().bold(), file.display());
            }
        }
    }

    Ok(clean)
}
