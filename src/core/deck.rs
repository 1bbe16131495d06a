/// Shared pile both parties draw from.
///
/// The deck does not bound its own decrements: callers are expected to
/// validate amounts against [`Deck::remaining`] before calling [`Deck::take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    remaining: i64,
}

impl Deck {
    pub const fn new(count: i64) -> Self {
        Self { remaining: count }
    }

    pub const fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Remove `count` items. Unchecked; may drive the deck negative.
    pub fn take(&mut self, count: i64) {
        self.remaining -= count;
    }

    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// True when an unchecked take removed more than was left.
    pub const fn is_underflowed(&self) -> bool {
        self.remaining < 0
    }
}
