use alloc::{collections::VecDeque, vec::Vec};
use rand::Rng;

use super::Strategy;

/// Replays a fixed list of takes in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    takes: VecDeque<i64>,
}

impl ScriptedPlayer {
    pub fn new(takes: Vec<i64>) -> Self {
        Self {
            takes: takes.into(),
        }
    }

    /// `count` copies of the same take.
    pub fn repeat(take: i64, count: usize) -> Self {
        Self {
            takes: core::iter::repeat(take).take(count).collect(),
        }
    }

    pub fn remaining_takes(&self) -> usize {
        self.takes.len()
    }
}

impl Strategy for ScriptedPlayer {
    fn next_take(&mut self, _remaining: i64, _min: i64, _max: i64) -> Option<i64> {
        self.takes.pop_front()
    }
}

/// Uniformly random legal takes.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomPlayer<R> {
    fn next_take(&mut self, remaining: i64, min: i64, max: i64) -> Option<i64> {
        let upper = max.min(remaining);
        if upper < min {
            return None;
        }
        Some(self.rng.random_range(min..=upper))
    }
}
