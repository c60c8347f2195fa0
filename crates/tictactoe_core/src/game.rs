//! Game state and turn rules for tic-tac-toe.

use crate::error::EngineError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::lines::{self, Line};
use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no line completed.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, .. } => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "Tie game!"),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The target cell already holds a mark.
    #[display("cell is occupied")]
    Occupied,
    /// The game has already ended.
    #[display("game is over")]
    GameOver,
}

/// Result of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mover completed a line.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The mover filled the last cell without a line.
    Tie,
    /// Play continues with the given player.
    Continue(Player),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns the terminal outcome, if the move ended the game.
    pub fn terminal(&self) -> Option<Outcome> {
        match *self {
            MoveOutcome::Win { player, line } => Some(Outcome::Win { player, line }),
            MoveOutcome::Tie => Some(Outcome::Tie),
            MoveOutcome::Continue(_) | MoveOutcome::Ignored(_) => None,
        }
    }

    /// Checks if the board was changed by the move.
    pub fn was_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Empty board, X to move.
    Fresh,
    /// At least one mark placed, not yet decided.
    InProgress,
    /// Won or tied; only [`GameState::reset`] leaves this phase.
    Terminal(Outcome),
}

/// Complete game state: the single source of truth for the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    active_player: Player,
    is_over: bool,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            is_over: false,
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns the terminal outcome, once there is one.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::Terminal(outcome),
            None if self.board.is_blank() => Phase::Fresh,
            None => Phase::InProgress,
        }
    }

    /// Status line for renderers: `Turn: X`, `O wins!` or `Tie game!`.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => format!("Turn: {}", self.active_player),
        }
    }

    /// Returns the game to the fresh state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Moving onto an occupied cell, or after the game is over, is a no-op
    /// reported as [`MoveOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if either index is
    /// outside `0..=2`.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, EngineError> {
        let coord = Coord::new(row, col)?;
        Ok(self.apply(coord))
    }

    /// Places the active player's mark at an already checked coordinate.
    #[instrument(skip(self, coord), fields(coord = %coord, player = %self.active_player))]
    pub fn apply(&mut self, coord: Coord) -> MoveOutcome {
        if self.is_over {
            debug!("Move ignored, game is over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(coord) {
            debug!("Move ignored, cell is occupied");
            return MoveOutcome::Ignored(IgnoreReason::Occupied);
        }

        let player = self.active_player;
        self.board.set(coord, Cell::from(player));

        let outcome = if let Some((winner, line)) = lines::winning_line(&self.board) {
            self.finish(Outcome::Win { player: winner, line });
            MoveOutcome::Win {
                player: winner,
                line,
            }
        } else if lines::is_full(&self.board) {
            self.finish(Outcome::Tie);
            MoveOutcome::Tie
        } else {
            self.active_player = player.opponent();
            MoveOutcome::Continue(self.active_player)
        };

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move at {coord}"
        );
        debug!(?outcome, "Move applied");
        outcome
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        self.is_over = true;
        self.outcome = Some(outcome);
    }

    /// Returns the first completed line in enumeration order.
    pub fn check_winner(&self) -> Option<Line> {
        self.winner().map(|(_, line)| line)
    }

    /// Returns the first completed line together with its owner.
    pub fn winner(&self) -> Option<(Player, Line)> {
        lines::winning_line(&self.board)
    }

    /// Checks if every cell is filled.
    ///
    /// Only meaningful as a tie once [`check_winner`](Self::check_winner)
    /// has returned `None`.
    pub fn check_tie(&self) -> bool {
        lines::is_full(&self.board)
    }

    /// Empty cells in row-major order; none once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_over {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{LINES, LineKind};

    fn play(game: &mut GameState, moves: &[(usize, usize)]) -> MoveOutcome {
        let mut last = MoveOutcome::Continue(game.active_player());
        for &(row, col) in moves {
            last = game.apply_move(row, col).unwrap();
        }
        last
    }

    #[test]
    fn test_fresh_state() {
        let game = GameState::new();
        assert_eq!(game.active_player(), Player::X);
        assert!(!game.is_over());
        assert_eq!(game.phase(), Phase::Fresh);
        assert_eq!(game.status_text(), "Turn: X");
        assert_eq!(game.legal_moves().len(), 9);
    }

    #[test]
    fn test_move_flips_player() {
        let mut game = GameState::new();
        let outcome = game.apply_move(1, 1).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue(Player::O));
        assert_eq!(game.board().get(Coord::CENTER), Cell::X);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.status_text(), "Turn: O");
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(0, 3),
            Err(EngineError::InvalidCoordinate { row: 0, col: 3 })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameState::new();
        game.apply_move(0, 0).unwrap();
        let before = game.clone();

        let outcome = game.apply_move(0, 0).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::Occupied));
        assert!(!outcome.was_applied());
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = GameState::new();
        let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(
            outcome,
            MoveOutcome::Win {
                player: Player::X,
                line: LINES[0]
            }
        );
        assert!(game.is_over());
        // The winner stays active; no flip after a terminal move.
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.status_text(), "X wins!");
        assert_eq!(game.check_winner().map(|l| l.kind()), Some(LineKind::Row(0)));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_move_after_game_over_is_ignored() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let before = game.clone();

        let outcome = game.apply_move(2, 2).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_tie() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        let outcome = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, MoveOutcome::Tie);
        assert_eq!(game.phase(), Phase::Terminal(Outcome::Tie));
        assert!(game.check_tie());
        assert_eq!(game.check_winner(), None);
        assert_eq!(game.status_text(), "Tie game!");
    }

    #[test]
    fn test_win_on_last_cell_is_a_win() {
        let mut game = GameState::new();
        // X O X / O X O / O X X -> X completes the diagonal on the 9th move.
        let outcome = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (2, 1), (1, 2), (2, 2)],
        );
        assert!(matches!(outcome, MoveOutcome::Win { player: Player::X, .. }), "{outcome:?}");
        assert!(game.check_tie());
    }

    #[test]
    fn test_reset_from_terminal() {
        let mut game = GameState::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.phase(), Phase::Fresh);
    }
}
