//! Word-list language detection
//!
//! The scoring model is deliberately simple: clean the input (strip
//! punctuation, lowercase), split on whitespace, count how often each
//! token occurs, then give every language the summed counts of the
//! tokens found in its word set. The language with the highest sum
//! wins.
//!
//! Languages are scanned in alphabetical order and a later language
//! must score strictly higher to take the lead, so ties resolve to the
//! alphabetically first name. Text that matches nothing still produces
//! a result (the first language at score 0); callers can check
//! [`Detection::is_unmatched`] to annotate that case.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::debug;

use crate::models::Detection;
use crate::profiles::LanguageProfiles;

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid regex"))
}

/// Scores text against a fixed set of language profiles.
///
/// Holds the profiles it was constructed with; call sites build one
/// after loading and pass it down explicitly.
pub struct Detector {
    profiles: LanguageProfiles,
}

impl Detector {
    pub fn new(profiles: LanguageProfiles) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &LanguageProfiles {
        &self.profiles
    }

    /// Score `text` against every profile and return the best match.
    ///
    /// Returns `None` only when no profiles are loaded, which
    /// [`LanguageProfiles::load`] rules out for any directory it
    /// accepts. Empty or all-punctuation text is fine: every language
    /// scores 0 and the alphabetically first one is returned.
    pub fn detect(&self, text: &str) -> Option<Detection> {
        let cleaned = clean(text);
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for token in cleaned.split_whitespace() {
            *counts.entry(token).or_insert(0) += 1;
        }
        let total_tokens: u64 = counts.values().sum();

        let mut scores = BTreeMap::new();
        for (language, words) in self.profiles.iter() {
            let score = counts
                .iter()
                .filter(|(token, _)| words.contains(**token))
                .map(|(_, count)| *count)
                .sum::<u64>();
            scores.insert(language.clone(), score);
        }

        // Strictly-greater comparison: on a tie the earlier
        // (alphabetically first) language keeps the lead.
        let mut winner: Option<(String, u64)> = None;
        for (language, &score) in &scores {
            let lead = match &winner {
                Some((_, leader)) => score > *leader,
                None => true,
            };
            if lead {
                winner = Some((language.clone(), score));
            }
        }

        let (language, score) = winner?;
        debug!(
            "Detected '{}' (score {}, {} tokens, {} languages considered)",
            language,
            score,
            total_tokens,
            scores.len()
        );
        Some(Detection {
            language,
            score,
            total_tokens,
            scores,
        })
    }
}

/// Strip everything that is neither a word character nor whitespace,
/// then lowercase. Unicode-aware, so accented letters survive.
fn clean(text: &str) -> String {
    punctuation().replace_all(text, "").to_lowercase()
}
