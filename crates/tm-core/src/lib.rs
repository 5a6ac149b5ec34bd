//! World dataset for Treasure Maze.
//!
//! Rooms, items, message templates and game settings are loaded once from
//! JSON (either the bundled "Лабиринт сокровищ" content or a file supplied by
//! the player) and handed to the engine as an owned [`World`]. The only
//! mutation the dataset supports after loading is removing an item from a
//! room.

/// Canonical movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Item definitions and winning effects.
pub mod item;
/// Message templates shown to the player.
pub mod messages;
/// Room records: exits, items, puzzles and traps.
pub mod room;
/// Content-level game settings.
pub mod settings;
/// Dataset consistency checks.
pub mod validate;
/// The world dataset that owns rooms and items.
pub mod world;

/// Re-export of [`direction::Direction`].
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, WinningEffect};
/// Re-export of [`messages::Messages`].
pub use messages::Messages;
/// Re-export room types.
pub use room::{Puzzle, Room, Trap};
/// Re-export settings types.
pub use settings::{GameSettings, MAX_HEALTH};
/// Re-export of [`validate::validate_world`].
pub use validate::validate_world;
/// Re-export world model types.
pub use world::{World, WorldMeta};
