//! Core domain types for germ war.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used when no size is configured.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Smallest supported board (the four seed corners plus room to move).
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board (one column letter per file).
pub const MAX_BOARD_SIZE: usize = 26;

/// Offsets of the eight cells surrounding a square.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

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
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player A (moves first, seeded on the main diagonal).
    A,
    /// Player B (seeded on the anti-diagonal).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::A) => 'A',
            Cell::Occupied(Player::B) => 'B',
        }
    }
}

/// Row/column coordinate on the board.
///
/// A coordinate is not tied to a board, so it may lie outside one;
/// [`Board::contains`] decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// King-move distance: the larger of the row and column gaps.
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Taxicab distance: the sum of the row and column gaps.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Board size outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Board size {} is not supported (expected {}..={})",
    size,
    MIN_BOARD_SIZE,
    MAX_BOARD_SIZE
)]
pub struct BoardSizeError {
    /// The rejected side length.
    pub size: usize,
}

/// Square germ war board.
///
/// The side length is fixed at construction; cells are stored in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board with the given side length.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardSizeError { size });
        }
        Ok(Self::blank(size))
    }

    pub(crate) fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether a row/column pair lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), &'static str> {
        let idx = self.index(coord).ok_or("Coordinate out of bounds")?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Writes a cell the engine already knows is on the board.
    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = cell;
        }
    }

    /// Checks if a cell is empty. Off-board cells are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Row-major index of an on-board coordinate.
    pub(crate) fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Steps from `coord` by a signed offset, staying on the board.
    pub fn offset(&self, coord: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        let row = coord.row.checked_add_signed(d_row)?;
        let col = coord.col.checked_add_signed(d_col)?;
        let next = Coord::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Iterates the on-board cells among the eight surrounding `coord`.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOURS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(coord, d_row, d_col))
    }

    /// Counts the pieces a player owns.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Columns are lettered `a`, `b`, ... and rows numbered from 0.
    pub fn display(&self) -> String {
        let mut result = String::from("  ");
        for col in 0..self.size {
            result.push(' ');
            result.push(char::from(b'a' + col as u8));
        }
        for (row, cells) in self.rows().enumerate() {
            result.push('\n');
            result.push_str(&format!("{row:>2}"));
            for cell in cells {
                result.push(' ');
                result.push(cell.symbol());
            }
        }
        result
    }
}
