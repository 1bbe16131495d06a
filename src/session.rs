#![cfg(feature = "std")]

//! One game session: an engine, the input validator and the result stream
//! observers subscribe to.

use tokio::sync::watch;

use crate::{
    core::{
        bot::Bot,
        common::{GameStatus, MoveError, MoveReport},
        config::GameConfig,
        game::{GameEngine, GameState},
        generator::Generator,
    },
    player::cli::parse_take,
    validate::TakeValidator,
};

pub struct GameSession<G: Generator> {
    engine: GameEngine<G>,
    validator: TakeValidator,
    results: watch::Sender<MoveReport>,
}

impl<G: Generator> GameSession<G> {
    /// Build the engine for `config` around an already constructed bot.
    pub fn new(config: GameConfig, bot: Bot<G>) -> Self {
        let engine = GameEngine::with_deck(config.deck_size, bot);
        let (results, _) = watch::channel(MoveReport::initial(config.deck_size));
        Self {
            engine,
            validator: TakeValidator::from_config(&config),
            results,
        }
    }

    /// Receiver that sees the initial report and every accepted move.
    pub fn subscribe(&self) -> watch::Receiver<MoveReport> {
        self.results.subscribe()
    }

    pub fn validator(&self) -> &TakeValidator {
        &self.validator
    }

    pub fn engine(&self) -> &GameEngine<G> {
        &self.engine
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn remaining(&self) -> i64 {
        self.engine.deck().remaining()
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// Validate `input`, play the round and publish its report.
    /// Rejected input leaves the game and the stream untouched.
    pub fn submit(&mut self, input: Option<i64>) -> Result<MoveReport, MoveError> {
        if self.engine.status().is_over() {
            return Err(MoveError::GameOver);
        }
        let take = self.validator.check(input, self.remaining())?;
        self.engine.make_move(take)?;
        let report = self.engine.last_move();
        self.results.send_replace(report);
        Ok(report)
    }

    /// Parse a line of user input and submit it.
    pub fn submit_line(&mut self, line: &str) -> anyhow::Result<MoveReport> {
        let input = parse_take(line).map_err(|e| anyhow::anyhow!(e))?;
        self.submit(input).map_err(|e| anyhow::anyhow!(e))
    }
}
