//! Output reporters for Langscout detection results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (always includes the score table)

mod json;
mod text;

use crate::models::Detection;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a detection in the specified format
pub fn report(detection: &Detection, format: OutputFormat, show_scores: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(detection, show_scores),
        // JSON always carries the full table; show_scores only affects text
        OutputFormat::Json => json::render(detection),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Create a minimal Detection for testing
    pub(crate) fn test_detection() -> Detection {
        let mut scores = BTreeMap::new();
        scores.insert("english".to_string(), 1);
        scores.insert("french".to_string(), 3);
        scores.insert("spanish".to_string(), 0);

        Detection {
            language: "french".to_string(),
            score: 3,
            total_tokens: 4,
            scores,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("terminal").unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_report_dispatches_by_format() {
        let detection = test_detection();
        let text = report(&detection, OutputFormat::Text, false).unwrap();
        assert!(text.contains("french"));
        let json = report(&detection, OutputFormat::Json, false).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
