/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// The eight compass offsets `(dr, dc)` scanned from a placed piece.
/// Both legality checking and flipping iterate this table.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Opening position: `(row, col)` of each starting piece.
pub const OPENING_WHITE: [(usize, usize); 2] = [(3, 3), (4, 4)];
pub const OPENING_BLACK: [(usize, usize); 2] = [(3, 4), (4, 3)];

/// Glyph marking an empty cell that is a legal move for the side to move.
pub const HINT_GLYPH: &str = " * ";

/// The three-character glyphs used to draw each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: &'static str,
    pub black: &'static str,
    pub white: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        empty: " . ",
        black: " ● ",
        white: " ○ ",
    };

    pub const ASCII: Glyphs = Glyphs {
        empty: " . ",
        black: " X ",
        white: " O ",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Runtime presentation settings for the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub glyphs: Glyphs,
    /// Mark legal moves of the side to move on the rendered board.
    pub show_hints: bool,
}
