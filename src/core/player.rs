use super::deck::Deck;

/// The human side of the table. Takes whatever amount it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Player;

impl Player {
    pub fn new() -> Self {
        Self
    }

    /// Remove `count` items from the deck. The amount is expected to be
    /// validated upstream; an oversized take is logged, not corrected.
    pub fn take_from_deck(&self, deck: &mut Deck, count: i64) {
        deck.take(count);
        log::debug!("player took {}, {} left", count, deck.remaining());
        if deck.is_underflowed() {
            log::warn!(
                "player take of {} drove the deck negative ({})",
                count,
                deck.remaining()
            );
        }
    }
}
