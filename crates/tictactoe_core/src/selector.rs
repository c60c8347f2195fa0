//! Heuristic computer opponent.
//!
//! The selector walks a fixed priority list and plays the first rule that
//! applies:
//!
//! 1. complete one of its own lines,
//! 2. block an opponent line,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take any random free cell.
//!
//! It is deliberately not a perfect player.

use crate::lines::LINES;
use crate::random::RandomSource;
use crate::types::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The priority rule that produced a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Rule {
    /// Completes the selector's own line.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the free center.
    Center,
    /// Random free corner.
    Corner,
    /// Random free cell.
    Fallback,
    /// Board was already full; the coordinate is not guaranteed empty.
    Degenerate,
}

/// A selected move and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Where to play.
    pub coord: Coord,
    /// Why.
    pub rule: Rule,
}

/// Picks moves for the computer player.
///
/// Never mutates the board; it only reads a snapshot.
#[derive(Debug, Clone)]
pub struct MoveSelector<R> {
    rng: R,
}

impl<R: RandomSource> MoveSelector<R> {
    /// Creates a selector drawing tie-breaks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move for O, the computer's mark.
    pub fn select_move(&mut self, board: &Board) -> Coord {
        self.select_move_for(board, Player::O).coord
    }

    /// Picks a move for `me`.
    #[instrument(skip(self, board), fields(me = %me))]
    pub fn select_move_for(&mut self, board: &Board, me: Player) -> Choice {
        let choice = self.choose(board, me);
        debug!(coord = %choice.coord, rule = %choice.rule, "Move selected");
        choice
    }

    fn choose(&mut self, board: &Board, me: Player) -> Choice {
        if let Some(coord) = completing_move(board, me) {
            return Choice { coord, rule: Rule::Win };
        }

        // Scan every line again for the opponent, independent of the pass above.
        if let Some(coord) = completing_move(board, me.opponent()) {
            return Choice { coord, rule: Rule::Block };
        }

        if board.is_empty(Coord::CENTER) {
            return Choice {
                coord: Coord::CENTER,
                rule: Rule::Center,
            };
        }

        let corners: Vec<Coord> = Coord::CORNERS
            .iter()
            .copied()
            .filter(|c| board.is_empty(*c))
            .collect();
        if let Some(coord) = self.pick_from(&corners) {
            return Choice { coord, rule: Rule::Corner };
        }

        let empty = board.empty_cells();
        if let Some(coord) = self.pick_from(&empty) {
            return Choice { coord, rule: Rule::Fallback };
        }

        warn!("Asked to move on a full board");
        let row = self.rng.pick(3);
        let col = self.rng.pick(3);
        Choice {
            coord: Coord::at(row, col),
            rule: Rule::Degenerate,
        }
    }

    fn pick_from(&mut self, options: &[Coord]) -> Option<Coord> {
        if options.is_empty() {
            return None;
        }
        options.get(self.rng.pick(options.len())).copied()
    }
}

/// First empty cell, in line order, that completes a line for `player`.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, player: Player) -> Option<Coord> {
    LINES
        .iter()
        .find_map(|line| line.completion_for(board, player))
}
