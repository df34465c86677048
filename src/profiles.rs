//! Language profile loading
//!
//! A profile is one language's vocabulary, read from a plain-text
//! dictionary file with one word per line. The file name minus the
//! `.txt` extension names the language:
//!
//! ```text
//! dictionaries/
//!   english.txt
//!   french.txt
//!   spanish.txt
//! ```
//!
//! Lines are trimmed and lowercased, blank lines are dropped, and
//! duplicates collapse into a set. Loading happens once at startup and
//! the mapping is immutable afterwards.

use std::collections::{BTreeMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::LanguageSummary;

/// File extension recognized as a dictionary. Everything else in the
/// directory (other extensions, subdirectories) is ignored.
pub const DICTIONARY_EXTENSION: &str = "txt";

/// Fatal startup errors from the profile loader.
///
/// None of these are retried; a dictionary directory that cannot be
/// loaded terminates the command with a non-zero exit.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("dictionary directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("dictionary path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read dictionary directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dictionary file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary file {path} is not valid UTF-8")]
    Decode { path: PathBuf },

    #[error("no dictionaries (*.txt) found in {0}")]
    NoDictionaries(PathBuf),
}

/// Immutable language-to-vocabulary mapping, built once at startup.
///
/// Backed by a `BTreeMap` so iteration order is alphabetical; the
/// detector's tie-breaking relies on that.
#[derive(Debug, Clone, Default)]
pub struct LanguageProfiles {
    languages: BTreeMap<String, HashSet<String>>,
}

impl LanguageProfiles {
    /// Load every `*.txt` file in `dir` as one language profile.
    ///
    /// The language name is the file name with the extension stripped
    /// (`french.txt` -> `french`). A file with no usable words still
    /// produces an (empty) entry, with a warning; a directory with no
    /// dictionary files at all is an error.
    pub fn load(dir: &Path) -> Result<Self, ProfileError> {
        if !dir.exists() {
            return Err(ProfileError::MissingDir(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(ProfileError::NotADirectory(dir.to_path_buf()));
        }

        let entries = std::fs::read_dir(dir).map_err(|source| ProfileError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut languages = BTreeMap::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_dictionary = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(DICTIONARY_EXTENSION))
                .unwrap_or(false);
            if !is_dictionary {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping dictionary with non-UTF-8 name: {}", path.display());
                continue;
            };

            let words = read_word_list(&path)?;
            if words.is_empty() {
                warn!("Dictionary {} contains no words", path.display());
            }
            debug!(
                "Loaded profile '{}' ({} words) from {}",
                language,
                words.len(),
                path.display()
            );
            languages.insert(language.to_string(), words);
        }

        if languages.is_empty() {
            return Err(ProfileError::NoDictionaries(dir.to_path_buf()));
        }

        debug!("Loaded {} language profiles from {}", languages.len(), dir.display());
        Ok(Self { languages })
    }

    /// Number of loaded languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Language names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// The word set for one language, if loaded.
    pub fn words(&self, language: &str) -> Option<&HashSet<String>> {
        self.languages.get(language)
    }

    /// Iterate `(language, word set)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.languages.iter()
    }

    /// Per-language summaries for listings, alphabetical.
    pub fn summaries(&self) -> Vec<LanguageSummary> {
        self.languages
            .iter()
            .map(|(language, words)| LanguageSummary {
                language: language.clone(),
                words: words.len(),
            })
            .collect()
    }

    /// Build profiles directly from word lists, bypassing the filesystem.
    #[cfg(test)]
    pub(crate) fn from_words(pairs: &[(&str, &[&str])]) -> Self {
        let mut languages = BTreeMap::new();
        for (language, words) in pairs {
            let set = words.iter().map(|w| w.to_lowercase()).collect();
            languages.insert((*language).to_string(), set);
        }
        Self { languages }
    }
}

/// Read one dictionary file into a deduplicated, lowercased word set.
fn read_word_list(path: &Path) -> Result<HashSet<String>, ProfileError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ProfileError::Decode {
                path: path.to_path_buf(),
            }
        } else {
            ProfileError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect())
}
