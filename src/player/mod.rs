//! Front-ends driving the player's side of a session
//!
//! - `cli`: interactive terminal play over an async line reader
//! - `scripted`: fixed or random takes for simulations and tests

#[cfg(feature = "std")]
use crate::{
    core::{common::GameStatus, generator::Generator},
    session::GameSession,
};

/// Interface implemented by non-interactive sources of player takes.
pub trait Strategy {
    /// Choose the next take given the items left and the allowed range.
    /// `None` means the strategy has nothing more to play.
    fn next_take(&mut self, remaining: i64, min: i64, max: i64) -> Option<i64>;
}

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_take, run_cli};

pub mod scripted;
pub use scripted::{RandomPlayer, ScriptedPlayer};

/// Drive `session` with `strategy` until the game ends or the strategy
/// runs out of takes. Rejected takes abort the run.
#[cfg(feature = "std")]
pub fn run_strategy<G: Generator, S: Strategy + ?Sized>(
    session: &mut GameSession<G>,
    strategy: &mut S,
) -> anyhow::Result<GameStatus> {
    let (min, max) = (session.validator().min(), session.validator().max());
    while !session.status().is_over() {
        let Some(take) = strategy.next_take(session.remaining(), min, max) else {
            break;
        };
        session
            .submit(Some(take))
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(session.status())
}
