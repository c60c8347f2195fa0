//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, and the computer's mark).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A checked `(row, col)` board coordinate.
///
/// Both components are always in `0..=2`; the only way to build one from
/// untrusted input is [`Coord::new`]. Deserialization goes through it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Coord {
    /// The center cell.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// The four corners, in row-major order.
    pub const CORNERS: [Coord; 4] = [
        Coord::at(0, 0),
        Coord::at(0, 2),
        Coord::at(2, 0),
        Coord::at(2, 2),
    ];

    /// All 9 cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, rejecting anything off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row > 2 || col > 2 {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable cell name.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

/// Unchecked wire form of a [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = EngineError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of cells holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Checks if no mark has been placed yet.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-9 key so the text doubles as a move prompt.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push_str(&(row * 3 + col + 1).to_string()),
                    marked => result.push(marked.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
