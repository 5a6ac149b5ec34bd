use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A node in the navigable location graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Description shown by `look`.
    #[serde(default)]
    pub description: String,
    /// Directed edges to other rooms. Edges need not be symmetric.
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
    /// Items lying in the room, in display order.
    #[serde(default)]
    pub items: Vec<String>,
    /// Riddle attached to the room, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<Puzzle>,
    /// Hazard that may fire when the player enters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap: Option<Trap>,
}

impl Room {
    /// Create an empty room with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            puzzle: None,
            trap: None,
        }
    }

    /// Whether a riddle is attached to this room.
    pub fn has_puzzle(&self) -> bool {
        self.puzzle.is_some()
    }

    /// Whether a trap is attached to this room.
    pub fn has_trap(&self) -> bool {
        self.trap.is_some()
    }

    /// Destination of the exit in `direction`, if there is one.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    /// Whether at least one `item` lies in the room.
    pub fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove one occurrence of `item`, keeping the order of the rest.
    ///
    /// Returns `false` if the item was not in the room.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Builder: add an exit.
    pub fn with_exit(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Builder: place an item in the room.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Builder: attach a riddle.
    pub fn with_puzzle(mut self, puzzle: Puzzle) -> Self {
        self.puzzle = Some(puzzle);
        self
    }

    /// Builder: attach a trap.
    pub fn with_trap(mut self, trap: Trap) -> Self {
        self.trap = Some(trap);
        self
    }
}

/// A single question/answer challenge that grants a reward item once solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The question put to the player.
    pub question: String,
    /// The expected answer, compared trimmed and case-insensitively.
    pub answer: String,
    /// Item added to the inventory on success.
    pub reward: String,
}

impl Puzzle {
    /// Create a puzzle.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        reward: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reward: reward.into(),
        }
    }

    /// Check a player's answer.
    pub fn is_answered_by(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// A probabilistic hazard that damages the player on entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trap {
    /// Damage dealt when the trap fires. Falls back to the global setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
}

impl Trap {
    /// A trap dealing a specific amount of damage.
    pub fn with_damage(damage: i32) -> Self {
        Self {
            damage: Some(damage),
        }
    }

    /// Damage this trap deals, given the global default.
    pub fn damage_or(&self, default: i32) -> i32 {
        self.damage.unwrap_or(default)
    }
}
