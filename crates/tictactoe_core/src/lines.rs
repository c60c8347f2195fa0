//! The eight winning lines and the rules evaluated over them.
//!
//! Rules are pure functions over a [`Board`] so the game state and the
//! move selector share one definition of "three in a row".

use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which row, column or diagonal a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row 0-2.
    #[display("row {_0}")]
    Row(usize),
    /// Column 0-2.
    #[display("column {_0}")]
    Column(usize),
    /// `(0,0)` to `(2,2)`.
    #[display("diagonal")]
    Diagonal,
    /// `(0,2)` to `(2,0)`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One of the 8 fixed three-cell winning combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: [Coord; 3],
}

const fn line(kind: LineKind, cells: [(usize, usize); 3]) -> Line {
    Line {
        kind,
        cells: [
            Coord::at(cells[0].0, cells[0].1),
            Coord::at(cells[1].0, cells[1].1),
            Coord::at(cells[2].0, cells[2].1),
        ],
    }
}

/// All winning lines: rows, then columns, then diagonals.
///
/// Callers rely on this order: the first qualifying line wins.
pub const LINES: [Line; 8] = [
    line(LineKind::Row(0), [(0, 0), (0, 1), (0, 2)]),
    line(LineKind::Row(1), [(1, 0), (1, 1), (1, 2)]),
    line(LineKind::Row(2), [(2, 0), (2, 1), (2, 2)]),
    line(LineKind::Column(0), [(0, 0), (1, 0), (2, 0)]),
    line(LineKind::Column(1), [(0, 1), (1, 1), (2, 1)]),
    line(LineKind::Column(2), [(0, 2), (1, 2), (2, 2)]),
    line(LineKind::Diagonal, [(0, 0), (1, 1), (2, 2)]),
    line(LineKind::AntiDiagonal, [(0, 2), (1, 1), (2, 0)]),
];

impl Line {
    /// Which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three coordinates of the line.
    pub fn cells(&self) -> [Coord; 3] {
        self.cells
    }

    /// Checks if the coordinate lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns the owner if all three cells hold the same mark.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells.map(|coord| board.get(coord));
        if a == b && b == c { a.mark() } else { None }
    }

    /// Returns the empty cell that would complete this line for `player`.
    ///
    /// Applies only when exactly two cells hold the player's mark and the
    /// third is empty.
    pub fn completion_for(&self, board: &Board, player: Player) -> Option<Coord> {
        let mark = Cell::from(player);
        let owned = self.cells.iter().filter(|c| board.get(**c) == mark).count();
        if owned != 2 {
            return None;
        }
        self.cells.iter().copied().find(|c| board.is_empty(*c))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Finds the first winning line, with its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Checks if every cell is occupied.
///
/// A full board is only a tie once [`winning_line`] has found nothing.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
