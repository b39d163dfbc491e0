//! TUI application state and logic

use super::rendering::{Hit, hit_test};
use crate::game::{
    GameError, GameSession, InputEvent, MAX_ATTEMPTS, Statistics, SubmitOutcome, VirtualKey,
};
use crate::wordlists::{EmptyRepositoryError, WordList};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub session: GameSession,
    pub rng: StdRng,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_keyboard: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
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

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `EmptyRepositoryError` if `words` has nothing to pick a target from.
    pub fn new(words: &'a WordList, mut rng: StdRng) -> Result<Self, EmptyRepositoryError> {
        let session = GameSession::start(words, &mut rng)?;

        Ok(Self {
            words,
            session,
            rng,
            input_mode: InputMode::Playing,
            messages: vec![
                Message {
                    text: format!("Guess the five-letter word in {MAX_ATTEMPTS} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type or click the keyboard. Accents are optional.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            show_keyboard: true,
            should_quit: false,
        })
    }

    /// Feed one player action to the session
    ///
    /// Actions are ignored once the game is over.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.input_mode == InputMode::GameOver {
            return;
        }

        match self.session.apply(event, self.words) {
            Ok(Some(outcome)) => self.on_outcome(&outcome),
            Ok(None) | Err(GameError::SessionTerminated) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn on_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Continue { .. } => {
                let left = self.session.attempts_remaining();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "try" } else { "tries" }),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won { attempts, .. } => {
                self.stats.record(&self.session);
                self.input_mode = InputMode::GameOver;

                let celebration = match *attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Lost { target, .. } => {
                self.stats.record(&self.session);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Out of guesses! The word was {target}."),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }

    /// Handle a key press from the physical keyboard
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_keyboard(),
            code if self.input_mode == InputMode::GameOver => match code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            code => {
                if let Some(event) = InputEvent::from_key(code) {
                    self.handle_input(event);
                }
            }
        }
    }

    /// Handle a mouse event against the screen laid out in `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match hit_test(area, self.show_keyboard, mouse.column, mouse.row) {
            Some(Hit::Key(VirtualKey::Enter)) if self.input_mode == InputMode::GameOver => {
                self.new_game();
            }
            Some(Hit::Key(key)) => self.handle_input(InputEvent::from_virtual_key(key)),
            // Only tiles of the row being typed can be selected
            Some(Hit::Tile { row, column }) if self.session.view().active_row == Some(row) => {
                self.handle_input(InputEvent::Select(column));
            }
            _ => {}
        }
    }

    pub fn toggle_keyboard(&mut self) {
        self.show_keyboard = !self.show_keyboard;
        debug!("On-screen keyboard {}", if self.show_keyboard { "shown" } else { "hidden" });
    }

    pub fn new_game(&mut self) {
        match GameSession::start(self.words, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
