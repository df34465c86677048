//! Languages command implementation
//!
//! Lists the loaded profiles so users can verify what a dictionary
//! directory actually contains before trusting detections from it.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::str::FromStr;

use crate::config;
use crate::profiles::LanguageProfiles;
use crate::reporters::OutputFormat;

pub fn run(dictionaries: Option<&Path>, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;

    let (dir, source) = config::resolve_dictionaries_dir(dictionaries);
    let profiles = LanguageProfiles::load(&dir).with_context(|| {
        format!(
            "Failed to load dictionaries from {}. Run `langscout init` to create a starter set",
            dir.display()
        )
    })?;
    let summaries = profiles.summaries();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "\n{} loaded from {} ({})",
        style(format!(
            "{} language {}",
            summaries.len(),
            if summaries.len() == 1 { "profile" } else { "profiles" }
        ))
        .bold(),
        dir.display(),
        source
    );
    println!();

    let width = summaries
        .iter()
        .map(|s| s.language.chars().count())
        .max()
        .unwrap_or(0);
    let mut total_words = 0usize;
    for summary in &summaries {
        total_words += summary.words;
        let count = format!("{} words", summary.words);
        let line = format!("  {:<width$}  {:>12}", summary.language, count, width = width);
        if summary.words == 0 {
            println!("{}  {}", style(line).dim(), style("(empty)").yellow());
        } else {
            println!("{}", line);
        }
    }
    println!();
    println!("{}", style(format!("  {} words total", total_words)).dim());

    Ok(())
}
