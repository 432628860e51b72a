//! TUI rendering with ratatui

use super::app::{App, AppMode, MessageStyle};
use crate::engine::Round;
use crate::output::formatters::{best_label, hint_checklist};
use crate::scores::ScoreStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 NUMBER GUESSING GAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    match (&app.round, app.mode) {
        (Some(round), AppMode::Playing | AppMode::RoundOver) => {
            render_attempts(f, round, chunks[0]);
            render_round_info(f, round, chunks[1]);
        }
        _ => {
            let picker: Vec<Line> = app
                .game
                .list_difficulties()
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", entry.index),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(
                            "{:<8} {:>2} chances",
                            entry.difficulty.name(),
                            entry.difficulty.attempt_budget()
                        )),
                    ])
                })
                .collect();

            let paragraph = Paragraph::new(picker).block(
                Block::default()
                    .title(" Select Difficulty ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(paragraph, area);
        }
    }
}

fn render_attempts(f: &mut Frame, round: &Round, area: Rect) {
    let budget = round.difficulty().attempt_budget();
    let used = round.attempts_used();
    // used never exceeds budget, so the percentage fits in u16
    let percent = u16::try_from(used * 100 / budget).unwrap_or(100);
    let color = match round.attempts_remaining() {
        0..=1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Attempts ({}) ", round.difficulty()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{budget} used"));

    f.render_widget(gauge, area);
}

fn render_round_info(f: &mut Frame, round: &Round, area: Rect) {
    let (low, high) = round.bounds().clamped();
    let last = round
        .last_guess()
        .map_or_else(|| "-".to_string(), |guess| guess.to_string());

    let content = vec![
        Line::from(vec![
            Span::raw("Known range: "),
            Span::styled(
                format!("{low} - {high}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Last guess:  {last}")),
        Line::from(format!("Remaining:   {}", round.attempts_remaining())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Hints: {}", hint_checklist(round.hints_given())),
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_scores<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .list_difficulties()
        .iter()
        .map(|entry| {
            let style = if entry.best.is_some() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!(
                "{:<8} {}",
                entry.difficulty.name(),
                best_label(entry.best)
            ))
            .style(style)
        })
        .collect();

    let scores =
        List::new(items).block(Block::default().title(" High Scores ").borders(Borders::ALL));
    f.render_widget(scores, area);
}

fn render_messages<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let (title, content, color) = match app.mode {
        AppMode::SelectDifficulty => (" Press 1-3 to pick a difficulty ", "", Color::Cyan),
        AppMode::Playing => (
            " Enter a guess, 'hint' or 'quit' ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        AppMode::RoundOver => (
            " n: New Round | d: Difficulty | q: Quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: ScoreStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let win_rate = if app.stats.rounds_played > 0 {
        app.stats.rounds_won as f64 / app.stats.rounds_played as f64 * 100.0
    } else {
        0.0
    };
    let stats = Paragraph::new(format!(
        "Rounds: {} | Win Rate: {win_rate:.0}%",
        app.stats.rounds_played
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DIFFICULTIES, Difficulty};
    use crate::engine::Game;
    use crate::scores::{MemoryStore, ScoreLedger};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app(preset: Option<Difficulty>) -> App<MemoryStore, StdRng> {
        let game = Game::new(
            ScoreLedger::load(MemoryStore::with_contents(r#"{"Easy": 4}"#)),
            StdRng::seed_from_u64(5),
        );
        App::new(game, preset)
    }

    fn press(app: &mut App<MemoryStore, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn draw(app: &App<MemoryStore, StdRng>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn picker_shown_without_round() {
        let text = draw(&app(None));

        assert!(text.contains("Select Difficulty"));
        assert!(text.contains("Press 1-3 to pick a difficulty"));
        assert!(!text.contains("Attempts ("));
    }

    #[test]
    fn round_panel_shown_while_playing() {
        let mut app = app(Some(DIFFICULTIES[2]));
        for c in "hint".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        let text = draw(&app);

        assert!(text.contains("Attempts (Hard)"));
        assert!(text.contains("1/3 used"));
        assert!(text.contains("Known range: 1 - 100"));
        assert!(text.contains("range  · parity"));
        assert!(!text.contains("Select Difficulty"));
    }

    #[test]
    fn picker_returns_after_changing_difficulty() {
        let mut app = app(Some(DIFFICULTIES[2]));
        for c in "quit".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(draw(&app).contains("n: New Round"));

        press(&mut app, KeyCode::Char('d'));
        let text = draw(&app);

        assert!(text.contains("Select Difficulty"));
        assert!(!text.contains("Attempts ("));
    }

    #[test]
    fn high_scores_listed() {
        let text = draw(&app(None));

        assert!(text.contains("High Scores"));
        assert!(text.contains("4 attempts"));
        assert!(text.contains("no record"));
    }
}
