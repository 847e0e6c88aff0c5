//! Banyan CLI - pooled tree-sitter parsing from the command line.
//!
//! Banyan keeps one lazily constructed parser handle per language and
//! exposes parse and syntax-check commands over them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Banyan: lazy multi-language parser pool.
#[derive(Parser)]
#[command(name = "banyan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report its syntax tree
    Parse {
        /// Source file to parse
        file: PathBuf,

        /// Print the full syntax tree as an s-expression
        #[arg(long)]
        sexp: bool,
    },

    /// Parse files and report syntax issues
    Check {
        /// Source files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List supported languages
    Languages {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Each command reports whether everything came back clean; `check` is
    // the only one that can succeed with a dirty result.
    let result = match cli.command {
        Commands::Parse { file, sexp } => cli::parse::run(&file, sexp),
        Commands::Check { files } => cli::check::run(&files),
        Commands::Languages { json } => cli::languages::run(json),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
