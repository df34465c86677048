//! User-level configuration for langscout
//!
//! Supports loading config from ~/.config/langscout/config.toml, the
//! machine-wide fallback when a project does not pin its own
//! dictionary directory.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub dictionaries: UserDictionaries,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserDictionaries {
    /// Fallback dictionary directory, used when neither the command
    /// line nor the project config names one
    pub dir: Option<PathBuf>,
}

impl UserConfig {
    /// Load the user config, returning defaults when the file is
    /// missing or unparsable. Never fatal; a broken user config must
    /// not take every project down with it.
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("langscout").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.dictionaries.dir.is_some() {
            self.dictionaries.dir = other.dictionaries.dir;
        }
    }

    /// The configured fallback dictionary directory, if any
    pub fn dictionaries_dir(&self) -> Option<&Path> {
        self.dictionaries.dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert!(config.dictionaries_dir().is_none());
    }

    #[test]
    fn test_load_returns_defaults_without_file() {
        let config = UserConfig::load().unwrap();
        // Should not crash even without a config file on disk; the
        // dir may legitimately be set on a developer machine.
        let _ = config.dictionaries_dir();
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[dictionaries]
dir = "/usr/share/langscout/dictionaries"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.dictionaries_dir(),
            Some(Path::new("/usr/share/langscout/dictionaries"))
        );
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert!(config.dictionaries_dir().is_none());
    }

    #[test]
    fn test_invalid_toml_does_not_crash() {
        let bad_toml = "this is [[ not valid toml {{{}}}";
        let result = toml::from_str::<UserConfig>(bad_toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = UserConfig::default();
        let other = UserConfig {
            dictionaries: UserDictionaries {
                dir: Some(PathBuf::from("/srv/wordlists")),
            },
        };
        base.merge(other);
        assert_eq!(base.dictionaries_dir(), Some(Path::new("/srv/wordlists")));
    }

    #[test]
    fn test_merge_preserves_base_when_other_is_none() {
        let mut base = UserConfig {
            dictionaries: UserDictionaries {
                dir: Some(PathBuf::from("/srv/original")),
            },
        };
        base.merge(UserConfig::default());
        assert_eq!(base.dictionaries_dir(), Some(Path::new("/srv/original")));
    }

    #[test]
    fn test_user_config_path_returns_some() {
        // On most systems, config_dir() should return a valid path
        if let Some(p) = UserConfig::user_config_path() {
            assert!(p.ends_with("langscout/config.toml"));
        }
    }
}
