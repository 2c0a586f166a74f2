//! Terminal front-end for the tic-tac-toe engine.
//!
//! Renders the engine's observable state and forwards key presses into it.
//! All game logic lives in [`tictactoe_engine`]; this crate only owns the
//! cursor, colors, and redraw scheduling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;

pub mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, Control, headline};
pub use cli::Cli;
pub use config::{ConfigError, Palette, TuiConfig};
