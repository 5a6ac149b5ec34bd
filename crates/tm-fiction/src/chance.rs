//! Randomness capability for traps and random events.
//!
//! The engine never calls `rand` directly; it asks a [`Chance`] source. The
//! production source is a seeded [`StdRng`], and [`Scripted`] replays fixed
//! outcomes for tests and demos.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of random decisions.
pub trait Chance {
    /// Return `true` with the given probability (0.0-1.0).
    fn roll(&mut self, probability: f64) -> bool;

    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl Chance for StdRng {
    fn roll(&mut self, probability: f64) -> bool {
        self.random::<f64>() < probability
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a queue of predetermined outcomes.
///
/// Once a queue runs dry, rolls return `false` and picks return `0`.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    rolls: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl Scripted {
    /// A source whose queues are empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue roll outcomes in order.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = bool>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue pick outcomes in order.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Number of roll outcomes not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Chance for Scripted {
    fn roll(&mut self, _probability: f64) -> bool {
        self.rolls.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}

/// Roll against a probability, short-circuiting the certain cases.
///
/// A probability of 0 never consults the source and always fails; 1 never
/// consults it and always succeeds.
pub(crate) fn check<C: Chance + ?Sized>(chance: &mut C, probability: f64) -> bool {
    if probability <= 0.0 {
        false
    } else if probability >= 1.0 {
        true
    } else {
        chance.roll(probability)
    }
}
