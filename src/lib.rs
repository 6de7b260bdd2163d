#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_move, run_session, Command, InputError, SessionEnd};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, DEFAULT_LOG_LEVEL};
