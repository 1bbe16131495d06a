//! Commonly used types and utilities for ease of import.

pub use crate::{
    Bot, ConstGenerator, Deck, GameConfig, GameEngine, GameStatus, Generator, MoveError,
    MoveReport, Player, RangeGenerator, Strategy, TakeValidator, Validate, Winner,
};

#[cfg(feature = "std")]
pub use crate::{run_cli, run_strategy, GameSession};
