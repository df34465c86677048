//! Project-level configuration support
//!
//! Loads per-project configuration from `langscout.toml` or
//! `.langscoutrc.json` in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # langscout.toml
//!
//! [dictionaries]
//! dir = "dictionaries"
//!
//! [defaults]
//! format = "text"
//! scores = true
//! no_emoji = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project-level configuration loaded from langscout.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Where the word lists live
    #[serde(default)]
    pub dictionaries: DictionariesConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Dictionary directory configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DictionariesConfig {
    /// Directory of `*.txt` word lists, relative to the working
    /// directory unless absolute
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Show the full score table by default
    #[serde(default)]
    pub scores: Option<bool>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

/// Load project configuration from the working directory.
///
/// Searches for configuration files in this order:
/// 1. `langscout.toml`
/// 2. `.langscoutrc.json`
///
/// Returns default configuration if no config file is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    // Try TOML first (preferred format)
    let toml_path = dir.join("langscout.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    // Try JSON
    let json_path = dir.join(".langscoutrc.json");
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    // No config found, return defaults
    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert!(config.dictionaries.dir.is_none());
        assert!(config.defaults.format.is_none());
        assert!(config.defaults.scores.is_none());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
[dictionaries]
dir = "wordlists"

[defaults]
format = "json"
scores = true
no_emoji = true
"#;
        let config: ProjectConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.dictionaries.dir.as_deref(),
            Some(Path::new("wordlists"))
        );
        assert_eq!(config.defaults.format, Some("json".to_string()));
        assert_eq!(config.defaults.scores, Some(true));
        assert_eq!(config.defaults.no_emoji, Some(true));
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert!(config.dictionaries.dir.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let bad_toml = "this is [[ not valid toml {{{}}}";
        assert!(toml::from_str::<ProjectConfig>(bad_toml).is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("langscout.toml"),
            "[dictionaries]\ndir = \"my-dicts\"\n",
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(
            config.dictionaries.dir.as_deref(),
            Some(Path::new("my-dicts"))
        );
    }

    #[test]
    fn test_load_falls_back_to_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".langscoutrc.json"),
            r#"{"dictionaries": {"dir": "json-dicts"}, "defaults": {"format": "text"}}"#,
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(
            config.dictionaries.dir.as_deref(),
            Some(Path::new("json-dicts"))
        );
        assert_eq!(config.defaults.format, Some("text".to_string()));
    }

    #[test]
    fn test_toml_wins_over_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("langscout.toml"),
            "[dictionaries]\ndir = \"from-toml\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(".langscoutrc.json"),
            r#"{"dictionaries": {"dir": "from-json"}}"#,
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(
            config.dictionaries.dir.as_deref(),
            Some(Path::new("from-toml"))
        );
    }

    #[test]
    fn test_load_without_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_config(dir.path());
        assert!(config.dictionaries.dir.is_none());
    }

    #[test]
    fn test_malformed_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("langscout.toml"), "not [ valid").unwrap();
        let config = load_project_config(dir.path());
        assert!(config.dictionaries.dir.is_none(), "bad config should not be fatal");
    }
}
