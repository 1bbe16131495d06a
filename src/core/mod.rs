//! Core take-away game engine (no_std compatible)
//!
//! This module contains the pure rule engine: the deck, the two move
//! functions and the orchestrator that alternates them. Its only external
//! dependencies are `rand` (for the bot's generator) and the `log` facade.

pub mod bot;
pub mod common;
pub mod config;
pub mod deck;
pub mod game;
pub mod generator;
pub mod player;

// Re-export commonly used types
pub use bot::Bot;
pub use common::{GameStatus, MoveError, MoveReport, Winner};
pub use config::*;
pub use deck::Deck;
pub use game::{GameEngine, GameState};
pub use generator::{ConstGenerator, Generator, RangeGenerator};
pub use player::Player;
