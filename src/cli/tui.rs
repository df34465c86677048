//! Interactive detection form
//!
//! The terminal take on a classic one-field detector form: a text
//! entry, Enter to detect, Ctrl+L to clear, and a result label
//! underneath. Detecting an empty entry raises a modal warning
//! instead of producing a result.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;
use std::path::Path;

use crate::config;
use crate::detector::Detector;
use crate::models::Detection;
use crate::profiles::LanguageProfiles;

pub struct App {
    detector: Detector,
    input: String,
    result: Option<Detection>,
    warning: Option<String>,
}

impl App {
    pub fn new(detector: Detector) -> Self {
        Self {
            detector,
            input: String::new(),
            result: None,
            warning: None,
        }
    }

    /// Enter: score the entry, or raise the empty-input warning
    fn detect(&mut self) {
        if self.input.trim().is_empty() {
            self.warning = Some("Please enter a sentence!".to_string());
            return;
        }
        self.result = self.detector.detect(&self.input);
    }

    /// Ctrl+L: reset both the entry and the result label
    fn clear(&mut self) {
        self.input.clear();
        self.result = None;
    }

    fn dismiss_warning(&mut self) {
        self.warning = None;
    }
}

pub fn run(dictionaries: Option<&Path>) -> Result<()> {
    // Load profiles before touching the terminal so startup errors
    // print normally instead of inside the alternate screen
    let (dir, _source) = config::resolve_dictionaries_dir(dictionaries);
    let profiles = LanguageProfiles::load(&dir).with_context(|| {
        format!(
            "Failed to load dictionaries from {}. Run `langscout init` to create a starter set",
            dir.display()
        )
    })?;
    let detector = Detector::new(profiles);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(detector);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // The modal swallows keys until dismissed
            if app.warning.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    app.dismiss_warning();
                }
                continue;
            }

            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear(),
                KeyCode::Enter => app.detect(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new(format!(
        " Langscout | {} languages loaded",
        app.detector.profiles().len()
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Text entry
    let entry = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enter a sentence "),
    );
    f.render_widget(entry, chunks[1]);

    if app.warning.is_none() {
        // Cursor after the typed text, clamped to the entry box
        let x = chunks[1].x + 1 + app.input.chars().count() as u16;
        let y = chunks[1].y + 1;
        f.set_cursor_position((x.min(chunks[1].right().saturating_sub(2)), y));
    }

    render_result(f, chunks[2], app);

    // Footer
    let footer = Paragraph::new(" Enter:Detect  Ctrl+L:Clear  Esc:Quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[3]);

    if let Some(message) = &app.warning {
        render_warning(f, message);
    }
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let mut text: Vec<Line> = Vec::new();

    match &app.result {
        Some(detection) => {
            let color = if detection.is_unmatched() {
                Color::Yellow
            } else {
                Color::Green
            };
            text.push(Line::from(vec![
                Span::styled("Detected language: ", Style::default().bold()),
                Span::styled(
                    detection.language.clone(),
                    Style::default().fg(color).bold(),
                ),
            ]));
            text.push(Line::from(Span::styled(
                format!(
                    "Score {} over {} tokens",
                    detection.score, detection.total_tokens
                ),
                Style::default().fg(Color::DarkGray),
            )));
            if detection.is_unmatched() {
                text.push(Line::from(Span::styled(
                    "No dictionary words matched.",
                    Style::default().fg(Color::Yellow),
                )));
            }
            text.push(Line::from(""));

            // Top scores, highest first
            let mut rows: Vec<(&String, &u64)> = detection.scores.iter().collect();
            rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (language, score) in rows.into_iter().take(8) {
                let row_style = if *language == detection.language {
                    Style::default().fg(color)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                text.push(Line::from(Span::styled(
                    format!("  {:<16} {:>5}", language, score),
                    row_style,
                )));
            }
        }
        None => {
            text.push(Line::from(Span::styled(
                "Type a sentence and press Enter.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let result = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });
    f.render_widget(result, area);
}

fn render_warning(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let warning = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Input Error ")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(warning, area);
}

/// Centered popup rectangle, sized as percentages of the frame
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
