//! TUI application state and logic

use crate::core::{DIFFICULTIES, Difficulty};
use crate::engine::{Feedback, Game, Round, RoundResult};
use crate::scores::ScoreStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of messages kept in the log panel
const MESSAGE_LIMIT: usize = 8;

/// Longest token the input line accepts
const INPUT_LIMIT: usize = 8;

/// Application state
pub struct App<S: ScoreStore, R: Rng> {
    pub game: Game<S, R>,
    pub difficulty: Option<Difficulty>,
    pub round: Option<Round>,
    pub mode: AppMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    SelectDifficulty,
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Rounds played since the app started
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl<S: ScoreStore, R: Rng> App<S, R> {
    /// Build the app; a preset difficulty skips the picker
    pub fn new(game: Game<S, R>, preset: Option<Difficulty>) -> Self {
        let mut app = Self {
            game,
            difficulty: None,
            round: None,
            mode: AppMode::SelectDifficulty,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! I'm thinking of a number between 1 and 100.",
            MessageStyle::Info,
        );
        match preset {
            Some(difficulty) => app.start_round(difficulty),
            None => app.add_message(
                &format!("Pick a difficulty (1-{}).", DIFFICULTIES.len()),
                MessageStyle::Info,
            ),
        }
        app
    }

    pub fn start_round(&mut self, difficulty: Difficulty) {
        let round = self.game.start_round(difficulty);
        self.difficulty = Some(difficulty);
        self.round = Some(round);
        self.mode = AppMode::Playing;
        self.input_buffer.clear();
        self.add_message(
            &format!(
                "{difficulty}: guess the number, {} attempts. 'hint' costs 1.",
                difficulty.attempt_budget()
            ),
            MessageStyle::Info,
        );
    }

    /// Submit the input line to the current round
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match self.game.submit(round, &raw) {
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            Ok(output) => {
                for feedback in &output.messages {
                    self.add_message(&feedback.to_string(), feedback_style(feedback));
                }
                if let Some(result) = output.terminal {
                    self.finish_round(result);
                }
            }
        }
    }

    fn finish_round(&mut self, result: RoundResult) {
        self.stats.rounds_played += 1;
        if matches!(result, RoundResult::Won { .. }) {
            self.stats.rounds_won += 1;
        }
        self.mode = AppMode::RoundOver;
        self.add_message(
            "Press 'n' to play again, 'd' to change difficulty or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Leave the session, abandoning any active round
    pub fn quit(&mut self) {
        if let Some(round) = self.round.as_mut()
            && !round.status().is_terminal()
        {
            let _ = self.game.submit_quit(round);
        }
        self.should_quit = true;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::SelectDifficulty => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char(c) => {
                    if let Some(difficulty) = Difficulty::from_choice(&c.to_string()) {
                        self.start_round(difficulty);
                    } else {
                        self.add_message("Invalid choice. Please try again.", MessageStyle::Error);
                    }
                }
                _ => {}
            },
            AppMode::Playing => match key.code {
                KeyCode::Esc => self.quit(),
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < INPUT_LIMIT && c.is_ascii_graphic() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
            AppMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('n') => {
                    if let Some(difficulty) = self.difficulty {
                        self.start_round(difficulty);
                    }
                }
                KeyCode::Char('d') => {
                    self.round = None;
                    self.mode = AppMode::SelectDifficulty;
                    self.add_message(
                        &format!("Pick a difficulty (1-{}).", DIFFICULTIES.len()),
                        MessageStyle::Info,
                    );
                }
                _ => {}
            },
        }
    }
}

const fn feedback_style(feedback: &Feedback) -> MessageStyle {
    match feedback {
        Feedback::Won { .. } | Feedback::NewRecord { .. } => MessageStyle::Success,
        Feedback::Exhausted { .. } => MessageStyle::Error,
        _ => MessageStyle::Info,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore, R: Rng>(app: App<S, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: ScoreStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
