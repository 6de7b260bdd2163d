//! Board state and the directional capture rule.

use crate::common::{BoardError, Cell, Player};
use crate::config::{BOARD_SIZE, DIRECTIONS, OPENING_BLACK, OPENING_WHITE};
use core::fmt;
use core::str::FromStr;

/// An 8×8 grid of cells indexed by `(row, col)`, both 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create the canonical opening position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for &(r, c) in OPENING_WHITE.iter() {
            board.cells[r][c] = Cell::White;
        }
        for &(r, c) in OPENING_BLACK.iter() {
            board.cells[r][c] = Cell::Black;
        }
        board
    }

    /// A board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows.
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &mut self.cells
    }

    #[inline]
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn piece_counts(&self) -> (usize, usize) {
        (self.count(Cell::Black), self.count(Cell::White))
    }

    /// Does a move by `player` at `(row, col)` capture along `(dr, dc)`?
    ///
    /// The adjacent cell must hold an opponent piece, and the run of
    /// opponent pieces must end on one of `player`'s own pieces. Running into
    /// an empty cell or off the board captures nothing.
    pub fn check_direction(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        player: Player,
    ) -> bool {
        self.run_length(row, col, dr, dc, player) > 0
    }

    /// Number of opponent pieces captured along `(dr, dc)`; zero when the
    /// direction is not a capture.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mine = Cell::from(player);
        let theirs = Cell::from(player.opponent());

        let mut pos = step(row, col, dr, dc);
        let mut run = 0;
        while let Some((r, c)) = pos {
            let cell = self.cells[r][c];
            if cell == theirs {
                run += 1;
            } else if cell == mine {
                return run;
            } else {
                return 0;
            }
            pos = step(r, c, dr, dc);
        }
        0
    }

    /// A move is valid when the cell is on the board, empty, and captures in
    /// at least one direction.
    pub fn is_valid_move(&self, row: usize, col: usize, player: Player) -> bool {
        Self::in_bounds(row, col)
            && self.cells[row][col].is_empty()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.check_direction(row, col, dr, dc, player))
    }

    /// Total number of pieces a move by `player` at `(row, col)` would flip.
    /// Zero for invalid moves.
    pub fn flips_for(&self, row: usize, col: usize, player: Player) -> usize {
        if !Self::in_bounds(row, col) || !self.cells[row][col].is_empty() {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| self.run_length(row, col, dr, dc, player))
            .sum()
    }

    /// Flip every captured opponent piece around `(row, col)` to `player`.
    ///
    /// Assumes the move has already been checked; the placed piece itself is
    /// not written here.
    pub fn flip_pieces(&mut self, row: usize, col: usize, player: Player) {
        let mine = Cell::from(player);
        for &(dr, dc) in DIRECTIONS.iter() {
            let run = self.run_length(row, col, dr, dc, player);
            let mut pos = step(row, col, dr, dc);
            for _ in 0..run {
                let Some((r, c)) = pos else { break };
                self.cells[r][c] = mine;
                pos = step(r, c, dr, dc);
            }
        }
    }

    /// Legal moves for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_valid_move(r, c, player))
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        self.legal_moves(player).next().is_some()
    }
}

/// Step one cell along `(dr, dc)`, or `None` at the board edge.
#[inline]
fn step(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    Board::in_bounds(r, c).then_some((r, c))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// One line per row using `.`, `B` and `W`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the format produced by `Display`. Whitespace is ignored, so rows
    /// may be spaced out or indented.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut idx = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if idx >= BOARD_SIZE * BOARD_SIZE {
                return Err(BoardError::InvalidDiagram);
            }
            board.cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = match ch {
                '.' => Cell::Empty,
                'B' => Cell::Black,
                'W' => Cell::White,
                _ => return Err(BoardError::InvalidDiagram),
            };
            idx += 1;
        }
        if idx != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardError::InvalidDiagram);
        }
        Ok(board)
    }
}
