//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every mutation
//! of a [`GameState`]. They are checked in debug builds and can be tested
//! independently.

use crate::game::GameState;
use crate::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has the same number of marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X-count equals O-count or exceeds it by one"
    }
}

/// Invariant: the active player agrees with the mark counts.
///
/// While play continues, X is to move exactly when the counts are equal.
/// Once the game is over the active player is whoever moved last.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let last_mover = if x > o { Player::X } else { Player::O };

        if state.is_over() {
            state.active_player() == last_mover
        } else {
            state.active_player() == last_mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, TurnParityInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameState::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_holds_after_moves_and_win() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.apply_move(row, col).unwrap();
            assert!(GameInvariants::check_all(&game).is_ok());
        }
        assert!(game.is_over());
    }

    #[test]
    fn test_detects_extra_x() {
        let mut game = GameState::new();
        game.apply_move(1, 1).unwrap();
        game.board_mut().set(Coord::at(0, 0), crate::Cell::X);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("X-count"));
    }

    #[test]
    fn test_detects_turn_mismatch() {
        let mut game = GameState::new();
        game.apply_move(1, 1).unwrap();
        // O's mark appears without O having moved: X should be next, O is.
        game.board_mut().set(Coord::at(0, 0), crate::Cell::O);

        assert!(MarkBalanceInvariant::holds(&game));
        assert!(!TurnParityInvariant::holds(&game));
    }
}
