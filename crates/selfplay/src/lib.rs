//! Self-play driver for ML-chess
//!
//! This crate provides:
//! - Engine-vs-engine games with JSON game records
//! - A console loop for playing against the engine
//! - TOML configuration of both players
//!
//! # Usage
//!
//! ```bash
//! # Minimax (white) against the random baseline, printed as JSON
//! cargo run -p selfplay -- run --json
//!
//! # Play black against a depth-3 engine
//! cargo run -p selfplay -- play --depth 3 --black
//! ```

mod config;
mod console;
mod game_runner;

pub use config::*;
pub use console::*;
pub use game_runner::*;
