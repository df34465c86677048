//! Text (terminal) reporter with colors and formatting

use crate::models::Detection;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Render a detection as formatted terminal output
pub fn render(detection: &Detection, show_scores: bool) -> Result<String> {
    let mut out = String::new();

    let name_color = if detection.is_unmatched() { YELLOW } else { GREEN };
    out.push_str(&format!(
        "\n{BOLD}Detected language:{RESET} {name_color}{BOLD}{}{RESET}\n",
        detection.language
    ));
    out.push_str(&format!(
        "{DIM}Score: {}  Tokens: {}  Languages: {}{RESET}\n",
        detection.score,
        detection.total_tokens,
        detection.scores.len()
    ));

    if detection.is_unmatched() {
        out.push_str(&format!(
            "{YELLOW}No dictionary words matched; showing the alphabetical default.{RESET}\n"
        ));
    }

    if show_scores && !detection.scores.is_empty() {
        out.push('\n');
        let width = detection
            .scores
            .keys()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max("LANGUAGE".len());

        out.push_str(&format!(
            "{DIM}  {:<width$}  SCORE{RESET}\n",
            "LANGUAGE",
            width = width
        ));
        out.push_str(&format!(
            "{DIM}  {:─<width$}──────{RESET}\n",
            "",
            width = width
        ));

        // Highest score first; equal scores keep alphabetical order
        let mut rows: Vec<(&String, &u64)> = detection.scores.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (language, score) in rows {
            let row_color = if *language == detection.language { GREEN } else { "" };
            let row_reset = if row_color.is_empty() { "" } else { RESET };
            out.push_str(&format!(
                "  {row_color}{:<width$}  {:>5}{row_reset}\n",
                language,
                score,
                width = width
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_detection;

    #[test]
    fn test_render_names_the_winner() {
        let out = render(&test_detection(), false).expect("render text");
        assert!(out.contains("french"));
        assert!(out.contains("Score: 3"));
        assert!(!out.contains("LANGUAGE"), "table hidden without show_scores");
    }

    #[test]
    fn test_render_score_table() {
        let out = render(&test_detection(), true).expect("render text");
        let table_start = out.find("LANGUAGE").expect("table header");
        let table = &out[table_start..];
        assert!(table.contains("english"));
        assert!(table.contains("spanish"));

        // Winner row comes first in the table
        let french_pos = table.find("french").expect("french row");
        let english_pos = table.find("english").expect("english row");
        assert!(french_pos < english_pos, "table should be sorted by score");
    }

    #[test]
    fn test_render_zero_match_note() {
        let mut detection = test_detection();
        detection.score = 0;
        detection.language = "english".to_string();
        for score in detection.scores.values_mut() {
            *score = 0;
        }
        let out = render(&detection, false).expect("render text");
        assert!(out.contains("No dictionary words matched"));
    }
}
