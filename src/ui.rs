#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    common::{Cell, Outcome},
    config::{GameConfig, BOARD_SIZE, HINT_GLYPH},
    GameEngine,
};

/// Render a position in the user's `"<row> <column>"` notation, e.g. `3 D`.
pub fn format_coord(row: usize, col: usize) -> String {
    let col = (b'A' + col as u8) as char;
    std::format!("{} {}", row + 1, col)
}

/// Draw the board with column letters across the top and 1-based row numbers
/// down the side.
pub fn render_board(engine: &GameEngine, config: &GameConfig) -> String {
    let glyphs = config.glyphs;
    let mut out = String::new();

    out.push_str("  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {} ", ch);
    }
    // No pad after the last column letter.
    truncate_trailing_space(&mut out);
    out.push('\n');

    for (r, row) in engine.board().cells().iter().enumerate() {
        let _ = write!(out, "{} ", r + 1);
        for (c, cell) in row.iter().enumerate() {
            let glyph = match cell {
                Cell::Empty if config.show_hints && engine.is_valid_move(r, c) => HINT_GLYPH,
                Cell::Empty => glyphs.empty,
                Cell::Black => glyphs.black,
                Cell::White => glyphs.white,
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}

fn truncate_trailing_space(s: &mut String) {
    while s.ends_with(' ') {
        s.pop();
    }
}

/// Side to move and both piece counts.
pub fn render_status(engine: &GameEngine) -> String {
    let (black, white) = engine.piece_counts();
    std::format!(
        "Current Turn: {}\nBlack Pieces: {}\nWhite Pieces: {}\n",
        engine.current_turn(),
        black,
        white
    )
}

/// Final banner with the winner and counts.
pub fn render_result(outcome: Outcome, black: usize, white: usize) -> String {
    std::format!(
        "Game Over! Winner: {}\nBlack Pieces: {}\nWhite Pieces: {}\n",
        outcome, black, white
    )
}
