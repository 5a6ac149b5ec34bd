//! Command interpreter and action engine for Treasure Maze.
//!
//! A [`GameSession`] owns one [`tm_core::World`] and one [`PlayerState`].
//! Each line of player input is tokenized by the parser, dispatched on its
//! verb, and answered with the text to print. Traps and random events draw
//! from an injectable [`Chance`] source so that tests can force outcomes.

/// Randomness capability used for traps and random events.
pub mod chance;
/// Run-level configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Text rendering for rooms, inventory, health and outcomes.
pub mod narrator;
/// Command tokenizing and classification.
pub mod parser;
/// Player state management.
pub mod player;
/// The action engine.
pub mod session;

pub use chance::{Chance, Scripted};
pub use config::{GameConfig, Rules};
pub use error::{GameError, GameResult};
pub use parser::{Command, parse_command, tokenize};
pub use player::PlayerState;
pub use session::{Ending, GameSession, Snapshot, StatusReport};
