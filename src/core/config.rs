/// Items in the pile at the start of a game.
pub const DEFAULT_DECK_SIZE: i64 = 15;
/// Smallest amount the player may take in one move.
pub const MIN_TAKE: i64 = 1;
/// Largest amount the player may take in one move.
pub const MAX_TAKE: i64 = 3;
/// Exclusive upper bound of the bot's random draw, giving takes of 1..=3.
pub const DEFAULT_BOT_CEIL: i64 = 4;
/// Draws the bot makes before it clamps its last sample to the pile.
pub const MAX_BOT_DRAWS: usize = 32;

/// Tunable parameters of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub deck_size: i64,
    pub min_take: i64,
    pub max_take: i64,
    pub bot_ceil: i64,
}

impl GameConfig {
    pub const fn new(deck_size: i64) -> Self {
        Self {
            deck_size,
            min_take: MIN_TAKE,
            max_take: MAX_TAKE,
            bot_ceil: DEFAULT_BOT_CEIL,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DECK_SIZE)
    }
}
