#![cfg(feature = "std")]

//! Terminal front-end: parsing typed moves and driving a game from a text
//! stream.

use std::fmt;
use std::io::{BufRead, Write};
use std::string::String;

use crate::{
    common::{MoveError, Outcome},
    config::{GameConfig, BOARD_SIZE},
    game::{GameEngine, TurnOutcome},
    ui::{format_coord, render_board, render_result, render_status},
};

/// Why a line of user input could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Expected exactly two tokens, `<row> <column>`.
    WrongTokenCount(usize),
    /// Row token is not a number.
    InvalidRow(String),
    /// Row number outside 1-8.
    RowOutOfRange(usize),
    /// Column token is not a single letter A-H.
    InvalidColumn(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "expected a row and a column (e.g. 3 D), got {} item(s)", n)
            }
            InputError::InvalidRow(s) => write!(f, "row '{}' is not a number", s),
            InputError::RowOutOfRange(r) => write!(f, "row {} out of range - must be 1-8", r),
            InputError::InvalidColumn(s) => write!(f, "column '{}' must be a letter A-H", s),
        }
    }
}

impl std::error::Error for InputError {}

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at 0-based `(row, col)`.
    Move { row: usize, col: usize },
    /// List the legal moves of the side to move.
    Moves,
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Quit,
    /// Input ran out before the game finished.
    InputClosed,
}

/// Parse `"<row 1-8> <column A-H>"` into 0-based `(row, col)`.
///
/// Column letters may be lower case. Anything else is an [`InputError`];
/// the result is always on the board.
pub fn parse_move(input: &str) -> Result<(usize, usize), InputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(InputError::WrongTokenCount(parts.len()));
    }

    let row: usize = parts[0]
        .parse()
        .map_err(|_| InputError::InvalidRow(parts[0].to_string()))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(InputError::RowOutOfRange(row));
    }

    let mut chars = parts[1].chars();
    let col = match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => {
            (ch.to_ascii_uppercase() as u8 - b'A') as usize
        }
        _ => BOARD_SIZE,
    };
    if col >= BOARD_SIZE {
        return Err(InputError::InvalidColumn(parts[1].to_string()));
    }

    Ok((row - 1, col))
}

/// Parse a full input line: a move or one of `moves`, `quit`, `exit`.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => Ok(Command::Moves),
        _ => parse_move(input).map(|(row, col)| Command::Move { row, col }),
    }
}

fn describe_rejection(err: MoveError) -> String {
    match err {
        MoveError::OutOfBounds { row, col } => {
            std::format!("row={}, col={} is off the board", row + 1, col + 1)
        }
        MoveError::Occupied { row, col } => {
            std::format!("{} is already occupied", format_coord(row, col))
        }
        MoveError::NoCapture { row, col } => {
            std::format!("{} does not capture any pieces", format_coord(row, col))
        }
    }
}

/// Play one game, reading commands from `input` and writing the board and
/// prompts to `output`, until the game ends, the user quits, or input runs
/// out.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    config: &GameConfig,
    input: R,
    output: &mut W,
) -> anyhow::Result<SessionEnd> {
    log::info!("starting game, {} to move", engine.current_turn());
    let mut lines = input.lines();

    while !engine.is_game_over() {
        write!(output, "{}", render_board(engine, config))?;
        write!(output, "{}", render_status(engine))?;
        write!(output, "Enter row (1-8) and column (A-H) separated by space: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                log::info!("input closed before the game finished");
                writeln!(output)?;
                return Ok(SessionEnd::InputClosed);
            }
        };

        match parse_command(&line) {
            Err(e) => {
                log::debug!("rejected input {:?}: {}", line, e);
                writeln!(output, "Invalid input. Please try again. ({})", e)?;
            }
            Ok(Command::Quit) => {
                log::info!("{} quit", engine.current_turn());
                return Ok(SessionEnd::Quit);
            }
            Ok(Command::Moves) => {
                let moves: Vec<String> = engine
                    .legal_moves()
                    .map(|(r, c)| format_coord(r, c))
                    .collect();
                writeln!(output, "Legal moves: {}", moves.join(", "))?;
            }
            Ok(Command::Move { row, col }) => match engine.play(row, col) {
                Ok(TurnOutcome::OpponentPassed) => {
                    writeln!(
                        output,
                        "{} cannot make a valid move. {} continues the turn.",
                        engine.other_player(),
                        engine.current_turn()
                    )?;
                }
                Ok(TurnOutcome::Switched | TurnOutcome::GameOver) => {}
                Err(e) => {
                    writeln!(output, "Invalid move. Please try again. ({})", describe_rejection(e))?;
                }
            },
        }
    }

    let outcome = engine.winner();
    let (black, white) = engine.piece_counts();
    write!(output, "{}", render_board(engine, config))?;
    write!(output, "{}", render_result(outcome, black, white))?;
    output.flush()?;
    log::info!("game finished: {} ({} - {})", outcome, black, white);
    Ok(SessionEnd::Finished(outcome))
}
