//! Input validation that runs before a move reaches the engine.

use crate::core::{
    common::MoveError,
    config::{GameConfig, MAX_TAKE, MIN_TAKE},
};

/// Accept-or-reject check on a possibly missing value.
pub trait Validate<T> {
    fn validate(&self, entity: Option<T>) -> bool;
}

/// Restricts player takes to an inclusive range, 1..=3 by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeValidator {
    min: i64,
    max: i64,
}

impl TakeValidator {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.min_take, config.max_take)
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Validate `entity` and also require it to fit in what is left.
    pub fn check(&self, entity: Option<i64>, remaining: i64) -> Result<i64, MoveError> {
        let take = entity.ok_or(MoveError::MissingInput)?;
        if !self.validate(Some(take)) {
            return Err(MoveError::OutOfRange(take));
        }
        if take > remaining {
            return Err(MoveError::ExceedsRemaining { take, remaining });
        }
        Ok(take)
    }
}

impl Default for TakeValidator {
    fn default() -> Self {
        Self::new(MIN_TAKE, MAX_TAKE)
    }
}

impl Validate<i64> for TakeValidator {
    fn validate(&self, entity: Option<i64>) -> bool {
        matches!(entity, Some(n) if (self.min..=self.max).contains(&n))
    }
}
