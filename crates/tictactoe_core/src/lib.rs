//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **GameState**: the board, whose turn it is, and whether the game is over
//! - **MoveSelector**: fixed-priority heuristic opponent
//! - **Lines**: the eight winning triples shared by both
//! - **Session**: mode selection, the computer-reply rule, and observers
//!
//! Nothing here performs I/O or blocks; presentation layers drive a
//! [`Session`] and redraw from its [`GameState`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Coord, Mode, ScriptedRandom, Session};
//!
//! let mut session = Session::new(Mode::HumanVsComputer, ScriptedRandom::default());
//! session.play(0, 0).unwrap();
//!
//! // The computer answered in the center.
//! assert!(!session.state().board().is_empty(Coord::CENTER));
//! assert_eq!(session.state().status_text(), "Turn: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod lines;
mod random;
mod selector;
mod session;
mod types;

pub use error::EngineError;
pub use game::{GameState, IgnoreReason, MoveOutcome, Outcome, Phase};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    TurnParityInvariant,
};
pub use lines::{LINES, Line, LineKind, is_full, winning_line};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use selector::{Choice, MoveSelector, Rule, completing_move};
pub use session::{GameEvent, GameObserver, Mode, Session, TracingObserver};
pub use types::{Board, Cell, Coord, Player};
