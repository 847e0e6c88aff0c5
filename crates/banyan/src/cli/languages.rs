//! `banyan languages` command implementation.

use banyan::Language;
use colored::Colorize;
use serde::Serialize;

/// One registry entry in `--json` output.
#[derive(Serialize)]
struct LanguageEntry {
    name: &'static str,
    extensions: &'static [&'static str],
}

/// Run the languages command.
pub fn run(json: bool) -> Result<bool, banyan::Error> {
    if json {
        let entries: Vec<LanguageEntry> = Language::ALL
            .iter()
            .map(|language| LanguageEntry {
                name: language.as_str(),
                extensions: language.extensions(),
            })
            .collect();
        let rendered =
            serde_json::to_string_pretty(&entries).expect("static registry data serializes");
        println!("{rendered}");
        return Ok(true);
    }

    println!("{}", "Supported languages".bold());
    for language in Language::ALL {
        println!(
            "  {} {} ({})",
            "•".dimmed(),
            language.display_name(),
            language.extensions().join(", ")
        );
    }

    Ok(true)
}
