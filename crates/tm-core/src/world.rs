use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::messages::Messages;
use crate::room::Room;
use crate::settings::GameSettings;
use crate::validate::validate_world;

/// The bundled "Лабиринт сокровищ" content.
const BUNDLED: &str = include_str!("../content/treasure_maze.json");

/// Metadata about the world itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title printed above the welcome message.
    pub title: String,
    /// Room the player starts in.
    pub start_room: String,
}

impl WorldMeta {
    /// Create metadata for a world starting in `start_room`.
    pub fn new(title: impl Into<String>, start_room: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_room: start_room.into(),
        }
    }
}

/// The world dataset. Owns all rooms and item definitions.
///
/// Rooms are only mutated by [`World::take_item`]; everything else is fixed
/// once the dataset is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Title and start room.
    pub meta: WorldMeta,
    /// Content-level tunables.
    #[serde(default)]
    pub settings: GameSettings,
    /// Player-facing message templates.
    #[serde(default)]
    pub messages: Messages,
    /// Pool of random event lines shown after some moves.
    #[serde(default)]
    pub events: Vec<String>,
    /// Lines printed by `help`.
    #[serde(default = "default_help")]
    pub help: Vec<String>,
    rooms: BTreeMap<String, Room>,
    #[serde(default)]
    items: BTreeMap<String, Item>,
}

impl World {
    /// Create an empty world. Add rooms before starting a session.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            settings: GameSettings::default(),
            messages: Messages::default(),
            events: Vec::new(),
            help: default_help(),
            rooms: BTreeMap::new(),
            items: BTreeMap::new(),
        }
    }

    /// The content that ships with the game.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let world: World = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Read, parse and validate a dataset file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Run the consistency checks, collecting every problem found.
    pub fn validate(&self) -> CoreResult<()> {
        let problems = validate_world(self);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(problems))
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add or replace a room.
    pub fn add_room(&mut self, id: impl Into<String>, room: Room) {
        self.rooms.insert(id.into(), room);
    }

    /// Look up a room by identifier.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Look up a room, failing with [`CoreError::RoomNotFound`].
    pub fn require_room(&self, id: &str) -> CoreResult<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| CoreError::RoomNotFound(id.to_string()))
    }

    /// Whether a room with this identifier exists.
    pub fn has_room(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Iterate over `(id, room)` pairs in identifier order.
    pub fn rooms(&self) -> impl Iterator<Item = (&str, &Room)> {
        self.rooms.iter().map(|(id, room)| (id.as_str(), room))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Remove one occurrence of `item` from a room.
    ///
    /// Returns `Ok(false)` if the item is not there.
    pub fn take_item(&mut self, room_id: &str, item: &str) -> CoreResult<bool> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| CoreError::RoomNotFound(room_id.to_string()))?;
        Ok(room.remove_item(item))
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Add or replace an item definition.
    pub fn add_item(&mut self, id: impl Into<String>, item: Item) {
        self.items.insert(id.into(), item);
    }

    /// Look up an item definition.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Iterate over `(id, item)` pairs in identifier order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Number of item definitions.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn default_help() -> Vec<String> {
    [
        "go <направление> - идти (north/south/east/west/up/down или север/юг/восток/запад/вверх/вниз)",
        "look - осмотреть комнату",
        "inventory - показать инвентарь",
        "take <предмет> - взять предмет",
        "use <предмет> - использовать предмет",
        "solve - решить загадку в комнате",
        "help - показать эту справку",
        "quit - выйти из игры",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::room::{Puzzle, Trap};

    fn small_world() -> World {
        let mut world = World::new(WorldMeta::new("Test", "a"));
        world.add_room(
            "a",
            Room::new("Room A")
                .with_exit(Direction::North, "b")
                .with_item("coin")
                .with_item("coin"),
        );
        world.add_room(
            "b",
            Room::new("Room B")
                .with_exit(Direction::South, "a")
                .with_trap(Trap::with_damage(1)),
        );
        world
    }

    #[test]
    fn take_item_removes_one_occurrence() {
        let mut world = small_world();
        assert!(world.take_item("a", "coin").unwrap());
        assert_eq!(world.room("a").unwrap().items, vec!["coin"]);
        assert!(world.take_item("a", "coin").unwrap());
        assert!(!world.take_item("a", "coin").unwrap());
    }

    #[test]
    fn take_item_from_missing_room() {
        let mut world = small_world();
        let err = world.take_item("nowhere", "coin").unwrap_err();
        assert!(matches!(err, CoreError::RoomNotFound(ref id) if id == "nowhere"));
    }

    #[test]
    fn require_room() {
        let world = small_world();
        assert_eq!(world.require_room("b").unwrap().name, "Room B");
        assert!(world.require_room("c").is_err());
    }

    #[test]
    fn bundled_world_loads_and_validates() {
        let world = World::bundled().unwrap();
        assert!(world.has_room(&world.meta.start_room));
        assert!(world.room_count() >= 5);
        assert!(!world.events.is_empty());

        let key = world.item("ключ").unwrap();
        assert!(key.winning_effect_in("treasure_room").is_some());
        assert!(key.winning_effect_in("start").is_none());

        let crystal = world.item("магический кристалл").unwrap();
        assert!(crystal.winning_effect_in("start").is_some());
    }

    #[test]
    fn bundled_world_has_puzzle_and_trap() {
        let world = World::bundled().unwrap();
        assert!(world.rooms().any(|(_, r)| r.has_puzzle()));
        assert!(world.rooms().any(|(_, r)| r.has_trap()));
    }

    #[test]
    fn from_json_rejects_dangling_exit() {
        let json = r#"{
            "meta": { "title": "Broken", "start_room": "a" },
            "rooms": {
                "a": { "name": "A", "exits": { "north": "missing" } }
            }
        }"#;
        let err = World::from_json(json).unwrap_err();
        match err {
            CoreError::Validation(problems) => {
                assert!(problems.iter().any(|p| p.contains("missing")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_untypeable_item_names() {
        let json = r#"{
            "meta": { "title": "Caps", "start_room": "a" },
            "rooms": { "a": { "name": "A", "items": ["Ключ"] } },
            "items": {
                "Ключ": { "usable": true, "use_description": "", "winning_effect": {} }
            }
        }"#;
        match World::from_json(json).unwrap_err() {
            CoreError::Validation(problems) => {
                assert_eq!(problems.len(), 2, "{problems:?}");
                assert!(problems.iter().all(|p| p.contains("use 'ключ'")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_bad_syntax() {
        assert!(matches!(
            World::from_json("{ not json"),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn minimal_json_gets_default_messages_and_help() {
        let json = r#"{
            "meta": { "title": "Tiny", "start_room": "a" },
            "rooms": { "a": { "name": "A" } }
        }"#;
        let world = World::from_json(json).unwrap();
        assert_eq!(world.messages, Messages::default());
        assert!(!world.help.is_empty());
        assert_eq!(world.item_count(), 0);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(
            &path,
            r#"{
                "meta": { "title": "File", "start_room": "a" },
                "rooms": {
                    "a": {
                        "name": "A",
                        "puzzle": { "question": "2+2", "answer": "4", "reward": "coin" }
                    }
                }
            }"#,
        )
        .unwrap();

        let world = World::load(&path).unwrap();
        assert_eq!(
            world.room("a").unwrap().puzzle,
            Some(Puzzle::new("2+2", "4", "coin"))
        );
    }

    #[test]
    fn load_missing_file() {
        let err = World::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }
}
