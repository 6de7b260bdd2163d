//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, GameConfig, GameEngine, GameStatus, Glyphs, MoveError, Outcome, Player,
    TurnOutcome,
};

#[cfg(feature = "std")]
pub use crate::{run_session, SessionEnd};
