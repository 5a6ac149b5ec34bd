use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical movement direction. Exits in the dataset are keyed by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Every canonical direction, in display order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Normalize a player token to a canonical direction.
    ///
    /// Accepts English names, their one-letter abbreviations and the Russian
    /// aliases shipped with the game. Matching is case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" | "север" | "с" => Some(Self::North),
            "s" | "south" | "юг" | "ю" => Some(Self::South),
            "e" | "east" | "восток" | "в" => Some(Self::East),
            "w" | "west" | "запад" | "з" => Some(Self::West),
            "u" | "up" | "вверх" | "наверх" => Some(Self::Up),
            "d" | "down" | "вниз" => Some(Self::Down),
            _ => None,
        }
    }

    /// Get the canonical name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_english() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("W"), Some(Direction::West));
        assert_eq!(Direction::parse("Down"), Some(Direction::Down));
    }

    #[test]
    fn parse_russian_aliases() {
        assert_eq!(Direction::parse("север"), Some(Direction::North));
        assert_eq!(Direction::parse("ЮГ"), Some(Direction::South));
        assert_eq!(Direction::parse("восток"), Some(Direction::East));
        assert_eq!(Direction::parse("запад"), Some(Direction::West));
        assert_eq!(Direction::parse("вверх"), Some(Direction::Up));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Direction::parse("northwest"), None);
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("налево"), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Direction::East).unwrap();
        assert_eq!(json, "\"east\"");
        let dir: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(dir, Direction::Up);
    }
}
