use serde::{Deserialize, Serialize};

/// An item definition. Only the item's location changes during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Whether `use` has an effect beyond printing the description.
    #[serde(default)]
    pub usable: bool,
    /// Text printed when the item is used.
    #[serde(default)]
    pub use_description: String,
    /// Victory condition triggered by using this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_effect: Option<WinningEffect>,
}

impl Item {
    /// A usable item with the given description.
    pub fn usable(use_description: impl Into<String>) -> Self {
        Self {
            usable: true,
            use_description: use_description.into(),
            winning_effect: None,
        }
    }

    /// An item that cannot be used; `use` only prints the description.
    pub fn inert(use_description: impl Into<String>) -> Self {
        Self {
            usable: false,
            use_description: use_description.into(),
            winning_effect: None,
        }
    }

    /// Builder: make using this item win the game.
    pub fn with_winning_effect(mut self, effect: WinningEffect) -> Self {
        self.winning_effect = Some(effect);
        self
    }

    /// The winning effect that applies when used in `room`, if any.
    pub fn winning_effect_in(&self, room: &str) -> Option<&WinningEffect> {
        self.winning_effect
            .as_ref()
            .filter(|effect| effect.applies_in(room))
    }
}

/// Declares that using an item ends the game in victory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WinningEffect {
    /// Room the item must be used in. `None` means anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_room: Option<String>,
    /// Lines narrated before the victory banner.
    #[serde(default)]
    pub text: Vec<String>,
}

impl WinningEffect {
    /// An effect that applies in any room.
    pub fn anywhere() -> Self {
        Self::default()
    }

    /// An effect that applies only in `room`.
    pub fn in_room(room: impl Into<String>) -> Self {
        Self {
            requires_room: Some(room.into()),
            text: Vec::new(),
        }
    }

    /// Builder: add a narration line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.text.push(line.into());
        self
    }

    /// Whether the room requirement is met in `room`.
    pub fn applies_in(&self, room: &str) -> bool {
        self.requires_room.as_deref().is_none_or(|r| r == room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_bound_effect_applies_only_there() {
        let key = Item::usable("Ключ блестит.")
            .with_winning_effect(WinningEffect::in_room("treasure_room"));
        assert!(key.winning_effect_in("treasure_room").is_some());
        assert!(key.winning_effect_in("hall").is_none());
    }

    #[test]
    fn unbound_effect_applies_everywhere() {
        let crystal = Item::usable("Кристалл мерцает.")
            .with_winning_effect(WinningEffect::anywhere().with_line("Свет!"));
        assert!(crystal.winning_effect_in("hall").is_some());
        assert!(crystal.winning_effect_in("start").is_some());
    }

    #[test]
    fn plain_item_has_no_effect() {
        let torch = Item::usable("Факел горит.");
        assert!(torch.winning_effect_in("treasure_room").is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let item: Item = serde_json::from_str(r#"{ "use_description": "Тяжёлый." }"#).unwrap();
        assert!(!item.usable);
        assert!(item.winning_effect.is_none());
    }
}
