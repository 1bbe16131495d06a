//! Common types for the take-away game: winners, statuses, move reports and errors.

/// Party that emptied the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Winner {
    Player,
    Bot,
}

impl Winner {
    /// Numeric winner code: 1 for the player, 2 for the bot.
    pub const fn code(self) -> u8 {
        match self {
            Winner::Player => 1,
            Winner::Bot => 2,
        }
    }
}

impl core::fmt::Display for Winner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Winner::Player => write!(f, "player"),
            Winner::Bot => write!(f, "bot"),
        }
    }
}

/// Current status of a game. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Winner),
}

impl GameStatus {
    pub fn winner(self) -> Option<Winner> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(w) => Some(w),
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Outcome of one round, as published to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    /// Winner once the pile is empty, `None` while the game continues.
    pub winner: Option<Winner>,
    /// Items left after the round.
    pub remaining: i64,
    /// Amount the player took. Zero for the initial report.
    pub player_took: i64,
    /// Amount the bot took, `None` if the bot did not move.
    pub bot_took: Option<i64>,
}

impl MoveReport {
    /// Report describing a fresh pile before anyone has moved.
    pub const fn initial(remaining: i64) -> Self {
        Self {
            winner: None,
            remaining,
            player_took: 0,
            bot_took: None,
        }
    }
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No amount was supplied.
    MissingInput,
    /// Amount is outside the allowed take range.
    OutOfRange(i64),
    /// Amount is larger than what is left in the pile.
    ExceedsRemaining { take: i64, remaining: i64 },
    /// The game already has a winner.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::MissingInput => write!(f, "No amount entered"),
            MoveError::OutOfRange(n) => write!(f, "Amount {} is out of range", n),
            MoveError::ExceedsRemaining { take, remaining } => {
                write!(f, "Cannot take {} with only {} left", take, remaining)
            }
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
