//! Command tokenizing, classification and name suggestions.

mod command;
mod suggest;

pub use command::{Command, parse_command, tokenize};
pub use suggest::closest_name;
