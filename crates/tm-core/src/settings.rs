//! Content-level game settings.
//!
//! These ship with the dataset. Run-level overrides (seed, forced chances)
//! live in the engine's configuration instead.

use serde::{Deserialize, Serialize};

/// Upper bound for `max_health`. The health bar draws one slot per point.
pub const MAX_HEALTH: i32 = 100;

/// Tunables that belong to the content rather than to a particular run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Starting and maximum health.
    pub max_health: i32,
    /// Damage dealt by traps that do not specify their own.
    pub trap_damage: i32,
    /// Probability that a trap fires on entry.
    pub trap_chance: f64,
    /// Probability that a random event fires after a move.
    pub random_event_chance: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_health: 3,
            trap_damage: 1,
            trap_chance: 0.5,
            random_event_chance: 0.1,
        }
    }
}
