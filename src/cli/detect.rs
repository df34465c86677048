//! Detect command implementation

use anyhow::{Context, Result};
use console::style;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::config;
use crate::detector::Detector;
use crate::profiles::LanguageProfiles;
use crate::reporters::{self, OutputFormat};

pub fn run(
    dictionaries: Option<&Path>,
    text: &[String],
    file: Option<&Path>,
    format: Option<&str>,
    scores: bool,
    no_emoji: bool,
) -> Result<()> {
    // Flags win over project config defaults
    let project = config::load_project_config(Path::new("."));
    let format = format
        .or(project.defaults.format.as_deref())
        .unwrap_or("text");
    let format = OutputFormat::from_str(format)?;
    let show_scores = scores || project.defaults.scores.unwrap_or(false);
    let no_emoji = no_emoji || project.defaults.no_emoji.unwrap_or(false);

    let input = gather_input(text, file)?;
    if input.trim().is_empty() {
        anyhow::bail!("No text to detect. Please enter a sentence.");
    }

    let (dir, source) = config::resolve_dictionaries_dir(dictionaries);
    debug!("Using dictionaries from {} ({})", dir.display(), source);

    let profiles = LanguageProfiles::load(&dir).with_context(|| {
        format!(
            "Failed to load dictionaries from {}. Run `langscout init` to create a starter set",
            dir.display()
        )
    })?;
    let detector = Detector::new(profiles);

    let detection = detector
        .detect(&input)
        .context("No language profiles loaded")?;

    let output = reporters::report(&detection, format, show_scores)?;
    println!("{}", output);

    if format == OutputFormat::Text && detection.is_unmatched() {
        let tip = format!(
            "Tip: add words to {}/<language>.txt or point --dictionaries at a richer set",
            dir.display()
        );
        if no_emoji {
            println!("{}", style(tip).dim());
        } else {
            println!("💡 {}", style(tip).dim());
        }
    }

    Ok(())
}

/// Text from arguments, the --file flag, or piped stdin, in that order
fn gather_input(text: &[String], file: Option<&Path>) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    anyhow::bail!("No text to detect. Pass TEXT, use --file, or pipe stdin.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_input_joins_arguments() {
        let words = vec!["bonjour".to_string(), "le".to_string(), "monde".to_string()];
        assert_eq!(gather_input(&words, None).unwrap(), "bonjour le monde");
    }

    #[test]
    fn test_gather_input_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "hola mundo\n").unwrap();
        assert_eq!(gather_input(&[], Some(&path)).unwrap(), "hola mundo\n");
    }

    #[test]
    fn test_gather_input_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(gather_input(&[], Some(&missing)).is_err());
    }
}
