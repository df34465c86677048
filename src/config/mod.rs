//! Configuration module for Langscout
//!
//! This module handles:
//! - Project-level configuration (langscout.toml)
//! - User-level configuration (~/.config/langscout/config.toml)
//! - Resolution of the effective dictionary directory

mod project_config;
mod user_config;

pub use project_config::{load_project_config, CliDefaults, DictionariesConfig, ProjectConfig};
pub use user_config::UserConfig;

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dictionary directory used when nothing else names one.
pub const DEFAULT_DICTIONARIES_DIR: &str = "./dictionaries";

/// Which layer supplied the effective dictionary directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionariesSource {
    /// `--dictionaries` flag or `LANGSCOUT_DICTIONARIES` env var
    CliOrEnv,
    /// `[dictionaries].dir` in langscout.toml / .langscoutrc.json
    Project,
    /// `[dictionaries].dir` in the user config
    User,
    /// The built-in `./dictionaries` fallback
    Default,
}

impl fmt::Display for DictionariesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionariesSource::CliOrEnv => write!(f, "--dictionaries / LANGSCOUT_DICTIONARIES"),
            DictionariesSource::Project => write!(f, "project config"),
            DictionariesSource::User => write!(f, "user config"),
            DictionariesSource::Default => write!(f, "built-in default"),
        }
    }
}

/// Resolve the dictionary directory, highest priority first:
/// CLI flag / env var, project config, user config, then the
/// `./dictionaries` default.
pub fn resolve_dictionaries_dir(flag: Option<&Path>) -> (PathBuf, DictionariesSource) {
    if let Some(dir) = flag {
        debug!("Dictionary directory from flag/env: {}", dir.display());
        return (dir.to_path_buf(), DictionariesSource::CliOrEnv);
    }

    let project = load_project_config(Path::new("."));
    if let Some(dir) = project.dictionaries.dir {
        debug!("Dictionary directory from project config: {}", dir.display());
        return (dir, DictionariesSource::Project);
    }

    if let Ok(user) = UserConfig::load() {
        if let Some(dir) = user.dictionaries_dir() {
            debug!("Dictionary directory from user config: {}", dir.display());
            return (dir.to_path_buf(), DictionariesSource::User);
        }
    }

    debug!("Dictionary directory defaulting to {DEFAULT_DICTIONARIES_DIR}");
    (
        PathBuf::from(DEFAULT_DICTIONARIES_DIR),
        DictionariesSource::Default,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_resolution() {
        let (dir, source) = resolve_dictionaries_dir(Some(Path::new("/tmp/words")));
        assert_eq!(dir, PathBuf::from("/tmp/words"));
        assert_eq!(source, DictionariesSource::CliOrEnv);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(DictionariesSource::Project.to_string(), "project config");
        assert_eq!(DictionariesSource::Default.to_string(), "built-in default");
    }
}
