use super::{config::MAX_BOT_DRAWS, deck::Deck, generator::Generator};

/// Automated opponent drawing its takes from a [`Generator`].
pub struct Bot<G: Generator> {
    generator: G,
}

impl<G: Generator> Bot<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Pick a legal amount for a deck holding `remaining` items.
    ///
    /// Rejection-samples up to [`MAX_BOT_DRAWS`] times, then clamps the last
    /// draw into `1..=remaining`. Returns 0 when nothing can be taken.
    pub fn choose_take(&mut self, remaining: i64) -> i64 {
        if remaining <= 0 {
            return 0;
        }
        let mut last = 1;
        for _ in 0..MAX_BOT_DRAWS {
            last = self.generator.generate();
            if (1..=remaining).contains(&last) {
                return last;
            }
        }
        let clamped = last.min(remaining).max(1);
        log::warn!(
            "bot found no legal draw in {} attempts, clamping {} to {}",
            MAX_BOT_DRAWS,
            last,
            clamped
        );
        clamped
    }

    /// Take a legal amount from the deck and return it.
    pub fn take_from_deck(&mut self, deck: &mut Deck) -> i64 {
        let take = self.choose_take(deck.remaining());
        if take == 0 {
            log::warn!("bot cannot move on a deck of {}", deck.remaining());
            return 0;
        }
        deck.take(take);
        log::debug!("bot took {}, {} left", take, deck.remaining());
        take
    }
}
