//! Configuration for a game session.

use tm_core::{GameSettings, MAX_HEALTH};

/// Run-level overrides applied on top of the dataset's settings.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Override for the trap probability.
    pub trap_chance: Option<f64>,
    /// Override for the random event probability.
    pub event_chance: Option<f64>,
    /// Override for starting and maximum health.
    pub max_health: Option<i32>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the trap probability (clamped to 0-1).
    ///
    /// A non-finite value clears the override, leaving the dataset's value.
    pub fn with_trap_chance(mut self, chance: f64) -> Self {
        self.trap_chance = probability(chance);
        self
    }

    /// Set the random event probability (clamped to 0-1).
    ///
    /// A non-finite value clears the override, leaving the dataset's value.
    pub fn with_event_chance(mut self, chance: f64) -> Self {
        self.event_chance = probability(chance);
        self
    }

    /// Set the maximum health (clamped to 1-[`MAX_HEALTH`]).
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = Some(health.clamp(1, MAX_HEALTH));
        self
    }

    /// Resolve the effective rules for a dataset.
    pub fn rules(&self, settings: &GameSettings) -> Rules {
        Rules {
            max_health: self.max_health.unwrap_or(settings.max_health),
            trap_damage: settings.trap_damage,
            trap_chance: self.trap_chance.unwrap_or(settings.trap_chance),
            event_chance: self.event_chance.unwrap_or(settings.random_event_chance),
        }
    }
}

fn probability(chance: f64) -> Option<f64> {
    chance.is_finite().then(|| chance.clamp(0.0, 1.0))
}

/// The effective numbers a session plays by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Starting and maximum health.
    pub max_health: i32,
    /// Damage for traps without their own value.
    pub trap_damage: i32,
    /// Probability that a trap fires on entry.
    pub trap_chance: f64,
    /// Probability of a random event after a move.
    pub event_chance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_settings() {
        let settings = GameSettings::default();
        let rules = GameConfig::default().rules(&settings);
        assert_eq!(rules.max_health, settings.max_health);
        assert_eq!(rules.trap_damage, settings.trap_damage);
        assert!((rules.trap_chance - settings.trap_chance).abs() < f64::EPSILON);
        assert!((rules.event_chance - settings.random_event_chance).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_trap_chance(1.0)
            .with_event_chance(0.0)
            .with_max_health(5);
        assert_eq!(cfg.seed, Some(123));

        let rules = cfg.rules(&GameSettings::default());
        assert_eq!(rules.max_health, 5);
        assert!((rules.trap_chance - 1.0).abs() < f64::EPSILON);
        assert!(rules.event_chance.abs() < f64::EPSILON);
    }

    #[test]
    fn values_are_clamped() {
        let cfg = GameConfig::default()
            .with_trap_chance(2.0)
            .with_event_chance(-1.0)
            .with_max_health(-4);
        assert_eq!(cfg.trap_chance, Some(1.0));
        assert_eq!(cfg.event_chance, Some(0.0));
        assert_eq!(cfg.max_health, Some(1));
    }

    #[test]
    fn non_finite_chances_fall_back_to_settings() {
        let cfg = GameConfig::default()
            .with_trap_chance(f64::NAN)
            .with_event_chance(f64::INFINITY);
        assert_eq!(cfg.trap_chance, None);
        assert_eq!(cfg.event_chance, None);

        let settings = GameSettings::default();
        let rules = cfg.rules(&settings);
        assert!((rules.trap_chance - settings.trap_chance).abs() < f64::EPSILON);
    }

    #[test]
    fn max_health_is_capped() {
        let cfg = GameConfig::default().with_max_health(2_000_000_000);
        assert_eq!(cfg.max_health, Some(MAX_HEALTH));
    }
}
