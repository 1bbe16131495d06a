//! Random-number capability used by the bot.
//!
//! The bot never touches an RNG directly; it asks a [`Generator`] for the
//! next candidate amount. Tests swap in [`ConstGenerator`] for fully
//! deterministic games.

use alloc::boxed::Box;
use rand::Rng;

use super::config::DEFAULT_BOT_CEIL;

/// Source of candidate take amounts.
pub trait Generator {
    fn generate(&mut self) -> i64;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self) -> i64 {
        (**self).generate()
    }
}

/// Uniform draws from `1..ceil` (upper bound exclusive).
pub struct RangeGenerator<R: Rng> {
    rng: R,
    ceil: i64,
}

impl<R: Rng> RangeGenerator<R> {
    /// A `ceil` below 2 would leave an empty range, so it is raised to 2.
    pub fn new(rng: R, ceil: i64) -> Self {
        Self {
            rng,
            ceil: ceil.max(2),
        }
    }

    pub fn with_default_ceil(rng: R) -> Self {
        Self::new(rng, DEFAULT_BOT_CEIL)
    }

    pub fn ceil(&self) -> i64 {
        self.ceil
    }
}

impl<R: Rng> Generator for RangeGenerator<R> {
    fn generate(&mut self) -> i64 {
        self.rng.random_range(1..self.ceil)
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstGenerator(pub i64);

impl Generator for ConstGenerator {
    fn generate(&mut self) -> i64 {
        self.0
    }
}
