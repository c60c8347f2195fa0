//! Game session: one board, one mode, and the turn-advance rule.

use crate::error::EngineError;
use crate::game::{GameState, IgnoreReason, MoveOutcome, Outcome};
use crate::random::RandomSource;
use crate::selector::{MoveSelector, Rule};
use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits across the board from the human playing X.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two humans share the board.
    #[serde(rename = "human")]
    #[strum(serialize = "human")]
    HumanVsHuman,
    /// The computer plays O.
    #[default]
    #[serde(rename = "computer")]
    #[strum(serialize = "computer")]
    HumanVsComputer,
}

impl Mode {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Play against another player",
            Mode::HumanVsComputer => "Play against the computer",
        }
    }

    /// Checks if the computer plays `player` in this mode.
    pub fn computer_plays(self, player: Player) -> bool {
        self == Mode::HumanVsComputer && player == Player::O
    }
}

/// A state change that renderers may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board was cleared; X is to move.
    Reset,
    /// A new mode was chosen (always followed by [`GameEvent::Reset`]).
    ModeSelected(Mode),
    /// A mark was placed.
    MovePlayed {
        /// Mark placed.
        player: Player,
        /// Where.
        coord: Coord,
        /// Set when the computer chose the move.
        rule: Option<Rule>,
    },
    /// A move was refused without changing anything.
    MoveIgnored {
        /// Requested cell.
        coord: Coord,
        /// Why it was refused.
        reason: IgnoreReason,
    },
    /// Play passes to the given player.
    TurnChanged(Player),
    /// The game ended.
    GameOver(Outcome),
}

/// Receives every event a [`Session`] emits, after the state has changed.
pub trait GameObserver {
    /// Called once per event with the post-change state.
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

/// Observer that logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        match event {
            GameEvent::GameOver(outcome) => info!(%outcome, "Game finished"),
            GameEvent::MovePlayed { player, coord, rule } => {
                info!(%player, %coord, ?rule, status = %state.status_text(), "Move played")
            }
            other => debug!(event = ?other, status = %state.status_text(), "Game event"),
        }
    }
}

/// One game session: the state, the mode, and the computer opponent.
pub struct Session<R> {
    state: GameState,
    mode: Mode,
    selector: MoveSelector<R>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<R> std::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<R: RandomSource> Session<R> {
    /// Creates a session with a fresh game.
    #[instrument(skip(rng))]
    pub fn new(mode: Mode, rng: R) -> Self {
        info!(%mode, "Creating new session");
        Self {
            state: GameState::new(),
            mode,
            selector: MoveSelector::new(rng),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all future events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> Vec<GameEvent> {
        self.mode = mode;
        let mut events = Vec::new();
        self.emit(GameEvent::ModeSelected(mode), &mut events);
        self.reset_into(&mut events);
        events
    }

    /// Clears the board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.reset_into(&mut events);
        events
    }

    /// Checks if the computer owes a move right now.
    pub fn computer_to_move(&self) -> bool {
        !self.state.is_over() && self.mode.computer_plays(self.state.active_player())
    }

    /// Plays a human move at `(row, col)`, then the computer's reply if one is due.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] before touching any state
    /// if the coordinate is off the board.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, EngineError> {
        let coord = Coord::new(row, col)?;
        let mut events = Vec::new();

        let outcome = self.apply(coord, None, &mut events);
        if outcome.was_applied() && self.computer_to_move() {
            self.computer_move_into(&mut events);
        }
        Ok(events)
    }

    /// Lets the selector play one move for whoever is to move.
    ///
    /// Does nothing once the game is over.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.computer_move_into(&mut events);
        events
    }

    fn computer_move_into(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.is_over() {
            return;
        }
        let me = self.state.active_player();
        let choice = self.selector.select_move_for(self.state.board(), me);
        self.apply(choice.coord, Some(choice.rule), events);
    }

    fn apply(&mut self, coord: Coord, rule: Option<Rule>, events: &mut Vec<GameEvent>) -> MoveOutcome {
        let player = self.state.active_player();
        let outcome = self.state.apply(coord);

        match outcome {
            MoveOutcome::Ignored(reason) => {
                self.emit(GameEvent::MoveIgnored { coord, reason }, events);
            }
            MoveOutcome::Continue(next) => {
                self.emit(GameEvent::MovePlayed { player, coord, rule }, events);
                self.emit(GameEvent::TurnChanged(next), events);
            }
            MoveOutcome::Win { .. } | MoveOutcome::Tie => {
                self.emit(GameEvent::MovePlayed { player, coord, rule }, events);
                if let Some(terminal) = outcome.terminal() {
                    self.emit(GameEvent::GameOver(terminal), events);
                }
            }
        }
        outcome
    }

    fn reset_into(&mut self, events: &mut Vec<GameEvent>) {
        self.state.reset();
        self.emit(GameEvent::Reset, events);
    }

    fn emit(&mut self, event: GameEvent, events: &mut Vec<GameEvent>) {
        for observer in &mut self.observers {
            observer.on_event(&event, &self.state);
        }
        events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

    impl GameObserver for Recorder {
        fn on_event(&mut self, event: &GameEvent, _state: &GameState) {
            self.0.borrow_mut().push(*event);
        }
    }

    #[test]
    fn test_computer_replies_in_computer_mode() {
        let mut session = Session::new(Mode::HumanVsComputer, ScriptedRandom::default());
        let events = session.play(0, 0).unwrap();

        assert_eq!(
            events,
            vec![
                GameEvent::MovePlayed { player: Player::X, coord: Coord::at(0, 0), rule: None },
                GameEvent::TurnChanged(Player::O),
                GameEvent::MovePlayed {
                    player: Player::O,
                    coord: Coord::CENTER,
                    rule: Some(Rule::Center)
                },
                GameEvent::TurnChanged(Player::X),
            ]
        );
        assert_eq!(session.state().active_player(), Player::X);
    }

    #[test]
    fn test_no_reply_in_two_player_mode() {
        let mut session = Session::new(Mode::HumanVsHuman, ScriptedRandom::default());
        session.play(1, 1).unwrap();
        assert_eq!(session.state().active_player(), Player::O);
        assert_eq!(session.state().board().empty_cells().len(), 8);
        assert!(!session.computer_to_move());
    }

    #[test]
    fn test_ignored_move_gets_no_reply() {
        let mut session = Session::new(Mode::HumanVsComputer, ScriptedRandom::default());
        session.play(0, 0).unwrap();
        let events = session.play(0, 0).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::MoveIgnored {
                coord: Coord::at(0, 0),
                reason: IgnoreReason::Occupied
            }]
        );
        assert_eq!(session.state().board().empty_cells().len(), 7);
    }

    #[test]
    fn test_invalid_coordinate_changes_nothing() {
        let mut session = Session::new(Mode::HumanVsComputer, ScriptedRandom::default());
        assert!(session.play(5, 0).is_err());
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_observers_see_every_event() {
        let recorder = Recorder::default();
        let mut session = Session::new(Mode::HumanVsHuman, ScriptedRandom::default());
        session.subscribe(recorder.clone());

        let mut returned = session.play(2, 2).unwrap();
        returned.extend(session.select_mode(Mode::HumanVsComputer));

        assert_eq!(*recorder.0.borrow(), returned);
        assert_eq!(returned.last(), Some(&GameEvent::Reset));
        assert_eq!(session.mode(), Mode::HumanVsComputer);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_computer_move_after_game_over_is_noop() {
        let mut session = Session::new(Mode::HumanVsHuman, ScriptedRandom::default());
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.play(row, col).unwrap();
        }
        assert!(session.state().is_over());
        assert!(session.computer_move().is_empty());
    }

    #[test]
    fn test_mode_parses_from_names() {
        assert_eq!("computer".parse::<Mode>().ok(), Some(Mode::HumanVsComputer));
        assert_eq!(Mode::HumanVsHuman.to_string(), "human");
    }
}
