//! TUI application state and logic

use crate::bank::WordBank;
use crate::commands::simple::{Action, parse_action};
use crate::core::{DifficultyAdvisor, Round};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    bank: &'a WordBank,
    pub advisor: DifficultyAdvisor,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    /// Fails when the bank has no words to play.
    pub fn new(bank: &'a WordBank) -> Result<Self> {
        let advisor = DifficultyAdvisor::new();
        let round = start_round(bank, &advisor)?;

        let mut app = Self {
            bank,
            advisor,
            round,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message(
            "Connection established. Guess a letter or the full password.",
            MessageStyle::Info,
        );
        app.add_message("TAB requests a hint, ESC disconnects.", MessageStyle::Info);
        Ok(app)
    }

    /// Submit the current input buffer as a player action
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match parse_action(&input) {
            Action::Exit => self.should_quit = true,
            Action::Hint => self.request_hint(),
            Action::Letter(letter) => {
                let hit = self.round.guess_letter(letter);
                self.report_guess(hit);
            }
            Action::Word(word) => {
                let hit = self.round.guess_word(&word);
                self.report_guess(hit);
            }
            Action::Invalid => {
                self.add_message("INVALID INPUT. ENTER A LETTER.", MessageStyle::Error);
            }
        }
    }

    /// Ask the round for the next hint
    pub fn request_hint(&mut self) {
        let hint = self.round.hint();
        self.add_message(&hint, MessageStyle::Info);
    }

    fn report_guess(&mut self, hit: bool) {
        let style = if hit {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        let text = self.round.message().to_string();
        self.add_message(&text, style);
        self.check_round_end();
    }

    fn check_round_end(&mut self) {
        if !self.round.is_over() {
            return;
        }

        self.advisor.record_result(self.round.won());
        self.input_mode = InputMode::RoundOver;

        if self.round.won() {
            self.add_message(
                &format!("SUCCESS. Target Decrypted: {}", self.round.target()),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("FAILURE. Target was: {}", self.round.target()),
                MessageStyle::Error,
            );
        }
        self.add_message(
            "Press 'n' to re-initialize or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Start the next round at the advisor's recommended difficulty
    ///
    /// # Errors
    /// Fails when the bank has no words to play.
    pub fn next_round(&mut self) -> Result<()> {
        self.round = start_round(self.bank, &self.advisor)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "System re-initialized at difficulty {}.",
                self.advisor.recommended_difficulty()
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn start_round(bank: &WordBank, advisor: &DifficultyAdvisor) -> Result<Round> {
    let record = bank
        .select(advisor.recommended_difficulty(), &mut rand::rng())
        .context("word bank is empty - no words to play")?;
    Ok(Round::new(record))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.next_round()?;
                    }
                    _ => {
                        // Round is settled; ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.request_hint();
                    }
                    KeyCode::Char(c) => {
                        if c.is_ascii_alphabetic() || c == '-' || c == ' ' {
                            app.input_buffer.push(c.to_ascii_uppercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        if !app.input_buffer.is_empty() {
                            app.submit_input();
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
