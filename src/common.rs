//! Common types for Reversi: colours, cell states, outcomes and errors.

use core::fmt;

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    /// The other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Result of comparing piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Black,
    White,
    Draw,
}

impl Outcome {
    /// Majority wins; equal counts draw.
    pub fn from_counts(black: usize, white: usize) -> Self {
        match black.cmp(&white) {
            core::cmp::Ordering::Greater => Outcome::Black,
            core::cmp::Ordering::Less => Outcome::White,
            core::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Black => write!(f, "Black"),
            Outcome::White => write!(f, "White"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is out of bounds [0..BOARD_SIZE).
    OutOfBounds { row: usize, col: usize },
    /// A board diagram could not be parsed.
    InvalidDiagram,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position row={}, col={} is out of bounds", row, col)
            }
            BoardError::InvalidDiagram => write!(f, "Board diagram must be 8 rows of 8 cells (., B, W)"),
        }
    }
}

/// Reasons a move is rejected by the engine. A rejected move never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a piece.
    Occupied { row: usize, col: usize },
    /// No opponent piece would be captured in any direction.
    NoCapture { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "row={}, col={} is off the board", row, col)
            }
            MoveError::Occupied { row, col } => {
                write!(f, "row={}, col={} is already occupied", row, col)
            }
            MoveError::NoCapture { row, col } => {
                write!(f, "row={}, col={} captures no pieces", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
