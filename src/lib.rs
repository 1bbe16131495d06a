#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
pub mod validate;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{RandomPlayer, ScriptedPlayer, Strategy};
#[cfg(feature = "std")]
pub use player::{parse_take, run_cli, run_strategy};
#[cfg(feature = "std")]
pub use session::GameSession;
pub use validate::{TakeValidator, Validate};
