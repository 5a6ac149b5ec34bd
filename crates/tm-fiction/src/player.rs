//! Player state management.

use std::collections::HashSet;

/// The player's current state in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Identifier of the room the player is in.
    pub location: String,
    /// Current health. May dip below zero before the death check.
    pub health: i32,
    /// Starting and maximum health.
    pub max_health: i32,
    /// Carried items in pickup order. Duplicates are allowed.
    pub inventory: Vec<String>,
    /// Rooms whose puzzle has been solved.
    pub solved_puzzles: HashSet<String>,
    /// Set by death or by quitting.
    pub game_over: bool,
    /// Set by a winning item.
    pub victory: bool,
}

impl PlayerState {
    /// Create a player at full health with an empty inventory.
    pub fn new(location: impl Into<String>, max_health: i32) -> Self {
        Self {
            location: location.into(),
            health: max_health,
            max_health,
            inventory: Vec::new(),
            solved_puzzles: HashSet::new(),
            game_over: false,
            victory: false,
        }
    }

    /// Whether the player reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.game_over || self.victory
    }

    /// Whether health is exhausted.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Check if the player carries at least one of an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Subtract damage and return the remaining health.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.health -= damage;
        self.health
    }

    /// Check if a room's puzzle has been solved.
    pub fn has_solved(&self, room: &str) -> bool {
        self.solved_puzzles.contains(room)
    }

    /// Record a solved puzzle. Returns `false` if it was already recorded.
    pub fn mark_solved(&mut self, room: impl Into<String>) -> bool {
        self.solved_puzzles.insert(room.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new("start", 3);

        assert_eq!(state.location, "start");
        assert_eq!(state.health, 3);
        assert_eq!(state.max_health, 3);
        assert!(state.inventory.is_empty());
        assert!(state.solved_puzzles.is_empty());
        assert!(!state.is_finished());
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut state = PlayerState::new("start", 3);

        assert!(!state.has_item("монета"));
        state.add_item("монета");
        state.add_item("монета");
        assert!(state.has_item("монета"));
        assert_eq!(state.inventory, vec!["монета", "монета"]);
    }

    #[test]
    fn damage_can_go_negative() {
        let mut state = PlayerState::new("start", 1);
        assert_eq!(state.take_damage(2), -1);
        assert!(state.is_dead());
    }

    #[test]
    fn solved_puzzles() {
        let mut state = PlayerState::new("start", 3);
        assert!(!state.has_solved("library"));
        assert!(state.mark_solved("library"));
        assert!(state.has_solved("library"));
        assert!(!state.mark_solved("library"));
    }

    #[test]
    fn terminal_flags() {
        let mut state = PlayerState::new("start", 3);
        state.victory = true;
        assert!(state.is_finished());

        let mut state = PlayerState::new("start", 3);
        state.game_over = true;
        assert!(state.is_finished());
    }
}
