//! Narrator system for generating the text shown to the player.

mod templates;

pub use templates::{
    BANNER_WIDTH, SEPARATOR_WIDTH, banner, describe_inventory, describe_room, health_bar,
    help_text, separator,
};
