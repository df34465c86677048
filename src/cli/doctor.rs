//! Doctor command - check environment

use anyhow::Result;
use std::path::Path;

use crate::config::{self, UserConfig};
use crate::profiles::LanguageProfiles;

pub fn run(dictionaries: Option<&Path>) -> Result<()> {
    println!("🩺 Langscout Doctor\n");

    // Which directory is in effect, and which layer picked it
    let (dir, source) = config::resolve_dictionaries_dir(dictionaries);
    println!("✓ Dictionary directory: {} ({})", dir.display(), source);

    match std::env::var("LANGSCOUT_DICTIONARIES") {
        Ok(value) => println!("✓ LANGSCOUT_DICTIONARIES: {}", value),
        Err(_) => println!("○ LANGSCOUT_DICTIONARIES: not set"),
    }

    if Path::new("langscout.toml").exists() {
        println!("✓ Project config: ./langscout.toml");
    } else {
        println!("○ Project config: ./langscout.toml (not found)");
    }

    match UserConfig::user_config_path() {
        Some(path) if path.exists() => println!("✓ User config: {}", path.display()),
        Some(path) => println!("○ User config: {} (not found)", path.display()),
        None => println!("○ User config: no config directory on this system"),
    }

    println!();
    match LanguageProfiles::load(&dir) {
        Ok(profiles) => {
            println!("✓ Loaded {} language profiles:", profiles.len());
            for summary in profiles.summaries() {
                if summary.words == 0 {
                    println!("  ○ {:<12} empty (add one word per line)", summary.language);
                } else {
                    println!("  ✓ {:<12} {} words", summary.language, summary.words);
                }
            }
            println!("\n✅ All checks passed!");
        }
        Err(e) => {
            println!("✗ Dictionaries failed to load: {}", e);
            println!("  Run `langscout init` to scaffold a starter set");
        }
    }

    Ok(())
}
