//! Error types for the engine.

use thiserror::Error;
use tm_core::{CoreError, Direction};

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while processing a turn.
///
/// Everything except [`GameError::Core`] is a recoverable input error: the
/// session reports it and leaves all state untouched.
#[derive(Debug, Error)]
pub enum GameError {
    /// The verb is not recognized.
    #[error("unknown command: {0}")]
    InvalidCommand(String),

    /// A verb that needs an argument was given none.
    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),

    /// The token is not a recognized direction.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// The direction is valid but the room has no exit that way.
    #[error("no exit {0} from here")]
    NoExit(Direction),

    /// The item is not in the current room.
    #[error("no item '{item}' here")]
    NoSuchItem {
        /// The requested item.
        item: String,
        /// Closest item name in the room, if any is close enough.
        suggestion: Option<String>,
    },

    /// The item is not in the inventory.
    #[error("item not in inventory: {item}")]
    ItemNotInInventory {
        /// The requested item.
        item: String,
        /// Closest inventory item name, if any is close enough.
        suggestion: Option<String>,
    },

    /// The item is carried but has no definition.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The current room has no puzzle.
    #[error("no puzzle in this room")]
    NoPuzzle,

    /// The current room's puzzle is already solved.
    #[error("puzzle already solved")]
    AlreadySolved,

    /// The game has ended; no further commands are accepted.
    #[error("the game is over")]
    GameFinished,

    /// The world dataset is inconsistent with the session state.
    #[error("world error: {0}")]
    Core(#[from] CoreError),
}

impl GameError {
    /// Whether this is a recoverable mistake in the player's input.
    pub fn is_user_input(&self) -> bool {
        !matches!(self, Self::Core(_))
    }
}
