//! CLI command definitions and handlers

mod detect;
mod doctor;
mod init;
mod languages;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Langscout - dictionary-powered language detection
///
/// 100% LOCAL - word lists live on your disk. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "langscout")]
#[command(
    version,
    about = "Guess the natural language of a sentence from per-language word lists",
    long_about = "Langscout loads a folder of plain-text dictionaries (one file per language, \
one word per line) and scores input text against every list: each word of the text found in \
a language's list adds its occurrence count to that language's score, and the highest total \
wins.\n\n\
100% LOCAL - word lists live on your disk. No data leaves your machine.\n\n\
Run without a subcommand to detect text directly:\n  \
langscout \"Bonjour le monde\"\n\n\
With no input at all, the interactive form opens.",
    after_help = "\
Examples:
  langscout \"Bonjour le monde\"                 Detect a sentence
  echo \"hola mundo\" | langscout                Detect piped text
  langscout detect --file letter.txt --scores  Full score table for a file
  langscout detect \"hello\" --format json       JSON output for scripting
  langscout languages                          List loaded dictionaries
  langscout init                               Scaffold ./dictionaries to get started
  langscout tui                                Open the interactive form

Documentation: https://github.com/Zach-hammad/langscout"
)]
pub struct Cli {
    /// Text to detect (quotes optional; words are joined with spaces)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Dictionary directory (one .txt word list per language)
    #[arg(long, global = true, env = "LANGSCOUT_DICTIONARIES", value_name = "DIR")]
    pub dictionaries: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of text from arguments, a file, or stdin
    #[command(after_help = "\
Examples:
  langscout detect \"Bonjour le monde\"         Detect a sentence
  langscout detect bonjour le monde           Quotes are optional
  langscout detect --file letter.txt          Detect a file's contents
  echo \"hola mundo\" | langscout detect        Detect piped text
  langscout detect \"hello\" --format json      JSON output for scripting
  langscout detect \"hello\" --scores           Show every language's score")]
    Detect {
        /// Text to detect (words are joined with spaces)
        #[arg(value_name = "TEXT")]
        text: Vec<String>,

        /// Read the text from a file instead
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format: text, json (default: text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Show the full per-language score table
        #[arg(long)]
        scores: bool,

        /// Disable emoji in output (cleaner for CI logs)
        #[arg(long)]
        no_emoji: bool,
    },

    /// Open the interactive detection form (type a sentence, Enter to detect)
    Tui,

    /// List loaded language profiles and their word counts
    Languages {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Scaffold a starter dictionary directory and a langscout.toml
    Init {
        /// Directory to create the word lists in
        #[arg(long, value_name = "DIR", default_value = "./dictionaries")]
        dir: PathBuf,
    },

    /// Check environment setup (dictionary directory, profiles, config)
    Doctor,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let dictionaries = cli.dictionaries.as_deref();

    match cli.command {
        Some(Commands::Detect {
            text,
            file,
            format,
            scores,
            no_emoji,
        }) => detect::run(
            dictionaries,
            &text,
            file.as_deref(),
            format.as_deref(),
            scores,
            no_emoji,
        ),

        Some(Commands::Tui) => tui::run(dictionaries),

        Some(Commands::Languages { format }) => languages::run(dictionaries, &format),

        Some(Commands::Init { dir }) => init::run(&dir),

        Some(Commands::Doctor) => doctor::run(dictionaries),

        Some(Commands::Version) => {
            println!("langscout {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        None => {
            if !cli.text.is_empty() {
                // `langscout some text` is shorthand for `langscout detect some text`
                detect::run(dictionaries, &cli.text, None, None, false, false)
            } else if !std::io::stdin().is_terminal() {
                // Piped input with no arguments: detect stdin
                detect::run(dictionaries, &[], None, None, false, false)
            } else {
                // Nothing to detect: open the form
                tui::run(dictionaries)
            }
        }
    }
}
