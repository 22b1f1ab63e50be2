//! Random draws used by the behavior controller

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the few random decisions the pet makes
pub trait Dice {
    /// Uniform draw in `[0, 1)`
    fn chance(&mut self) -> f64;

    /// Fair coin flip
    fn coin(&mut self) -> bool;

    /// Uniform draw in `[low, high]`
    fn between(&mut self, low: f32, high: f32) -> f32;
}

/// [`Dice`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R>(pub R);

impl RngDice<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngDice<StdRng> {
    /// Reproducible dice for replays
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn chance(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn between(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.0.random_range(low..=high)
    }
}

/// Dice that replay a fixed script of values.
///
/// `chance` pops from the chance queue (0.99 when empty, so nothing random
/// happens), `coin` pops from the coin queue (heads when empty) and `between`
/// returns the midpoint of the range unless a fraction is queued.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    chances: VecDeque<f64>,
    coins: VecDeque<bool>,
    fractions: VecDeque<f32>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chances(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.chances.extend(values);
        self
    }

    pub fn with_coins(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.coins.extend(values);
        self
    }

    /// Queue positions within the next `between` ranges, 0.0 = low, 1.0 = high
    pub fn with_fractions(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.fractions.extend(values);
        self
    }
}

impl Dice for ScriptedDice {
    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(0.99)
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }

    fn between(&mut self, low: f32, high: f32) -> f32 {
        let t = self.fractions.pop_front().unwrap_or(0.5);
        low + (high - low) * t
    }
}
