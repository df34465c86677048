//! JSON reporter
//!
//! Outputs the full Detection as pretty-printed JSON, score table
//! included. Useful for machine consumption, piping to jq, or further
//! processing.

use crate::models::Detection;
use anyhow::Result;

/// Render detection as JSON
pub fn render(detection: &Detection) -> Result<String> {
    Ok(serde_json::to_string_pretty(detection)?)
}

/// Render detection as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(detection: &Detection) -> Result<String> {
    Ok(serde_json::to_string(detection)?)
}
