//! Core data models for Langscout
//!
//! These models are shared by the detector, the reporters, and the CLI
//! for representing detection results and loaded profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of scoring one piece of text against the loaded profiles.
///
/// `scores` keeps every language that was considered (alphabetical
/// order), so reporters can show the full table, not just the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Winning language (alphabetically first on a tie).
    pub language: String,
    /// The winner's score: summed frequencies of its matched words.
    pub score: u64,
    /// Total word tokens counted in the cleaned input.
    pub total_tokens: u64,
    /// Per-language score table.
    #[serde(default)]
    pub scores: BTreeMap<String, u64>,
}

impl Detection {
    /// True when no word of the input appears in any profile.
    ///
    /// The detector still names a language in this case (the
    /// alphabetically first one), so callers use this to annotate the
    /// result rather than suppress it.
    pub fn is_unmatched(&self) -> bool {
        self.score == 0
    }
}

/// One loaded profile, as listed by `langscout languages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub language: String,
    /// Unique words in the profile after trim/lowercase/dedup.
    pub words: usize,
}
