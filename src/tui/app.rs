//! Application state and key handling.
//!
//! The app never stores board contents itself; everything it shows is read
//! back from the session after each event.

use super::input::{digit_to_coord, move_cursor};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use tictactoe_core::{
    Coord, GameEvent, GameState, Line, Mode, Outcome, RandomSource, Session, TracingObserver,
};
use tracing::{debug, instrument, warn};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing the game mode.
    ModeSelect {
        /// Menu entry under the cursor.
        highlighted: Mode,
    },
    /// A game is running.
    Playing,
    /// Someone won; waiting for y/n.
    PlayAgain,
    /// Tie; the next key starts a new game.
    TieAck,
}

/// Main application state.
pub struct App {
    session: Session<Box<dyn RandomSource>>,
    screen: Screen,
    cursor: Coord,
    last_action: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app, starting on the mode menu unless a mode is given.
    #[instrument(skip(rng))]
    pub fn new(mode: Option<Mode>, rng: Box<dyn RandomSource>) -> Self {
        let mut session = Session::new(mode.unwrap_or_default(), rng);
        session.subscribe(TracingObserver);

        let screen = match mode {
            Some(_) => Screen::Playing,
            None => Screen::ModeSelect {
                highlighted: Mode::default(),
            },
        };

        Self {
            session,
            screen,
            cursor: Coord::CENTER,
            last_action: None,
            should_quit: false,
        }
    }

    /// Gets the game state to render.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Gets the session mode.
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Describes the most recent move, if any.
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Winning line to highlight, once there is one.
    pub fn winning_line(&self) -> Option<Line> {
        self.state().outcome().and_then(|o| o.line())
    }

    /// Status line for the current screen.
    pub fn status(&self) -> String {
        match self.screen {
            Screen::ModeSelect { .. } => "Select a game mode".to_string(),
            Screen::Playing => self.state().status_text(),
            Screen::PlayAgain => format!("{} Play again? (y/n)", self.state().status_text()),
            Screen::TieAck => "Tie game! Press any key for a new game.".to_string(),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            debug!("User quit");
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::ModeSelect { highlighted } => self.handle_menu_key(highlighted, key),
            Screen::Playing => self.handle_board_key(key),
            Screen::PlayAgain => match key {
                KeyCode::Char('y') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('n') => self.open_menu(),
                _ => {}
            },
            Screen::TieAck => self.new_game(),
        }
    }

    fn handle_menu_key(&mut self, highlighted: Mode, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                let next = Mode::iter()
                    .cycle()
                    .skip_while(|m| *m != highlighted)
                    .nth(1)
                    .unwrap_or(highlighted);
                self.screen = Screen::ModeSelect { highlighted: next };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.choose_mode(highlighted),
            KeyCode::Char('h') => self.choose_mode(Mode::HumanVsHuman),
            KeyCode::Char('c') => self.choose_mode(Mode::HumanVsComputer),
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('r') => self.new_game(),
            KeyCode::Char('m') => self.open_menu(),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_to_coord(c) {
                    self.cursor = coord;
                    self.place(coord);
                }
            }
            _ => {}
        }
    }

    fn choose_mode(&mut self, mode: Mode) {
        let events = self.session.select_mode(mode);
        self.absorb(&events);
        self.cursor = Coord::CENTER;
        self.screen = Screen::Playing;
    }

    fn open_menu(&mut self) {
        self.screen = Screen::ModeSelect {
            highlighted: self.session.mode(),
        };
    }

    fn new_game(&mut self) {
        let events = self.session.reset();
        self.absorb(&events);
        self.screen = Screen::Playing;
    }

    fn place(&mut self, coord: Coord) {
        match self.session.play(coord.row(), coord.col()) {
            Ok(events) => self.absorb(&events),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.last_action = Some(e.to_string());
            }
        }
    }

    fn absorb(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Reset => self.last_action = None,
                GameEvent::MovePlayed {
                    player,
                    coord,
                    rule: Some(rule),
                } => {
                    self.last_action = Some(format!(
                        "Computer ({player}) played {} [{rule}]",
                        coord.label()
                    ));
                }
                GameEvent::MovePlayed {
                    player,
                    coord,
                    rule: None,
                } => {
                    self.last_action = Some(format!("{player} played {}", coord.label()));
                }
                GameEvent::MoveIgnored { coord, reason } => {
                    self.last_action = Some(format!("{} ignored: {reason}", coord.label()));
                }
                GameEvent::GameOver(Outcome::Win { .. }) => self.screen = Screen::PlayAgain,
                GameEvent::GameOver(Outcome::Tie) => self.screen = Screen::TieAck,
                GameEvent::ModeSelected(_) | GameEvent::TurnChanged(_) => {}
            }
        }
    }
}
