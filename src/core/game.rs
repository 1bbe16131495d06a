use crate::core::{
    bot::Bot,
    common::{GameStatus, MoveError, MoveReport, Winner},
    deck::Deck,
    generator::Generator,
    player::Player,
};

/// Snapshot of a game for rendering or reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub remaining: i64,
    pub status: GameStatus,
    /// Decrements applied so far, counting both parties.
    pub moves: usize,
}

/// Core game logic alternating a player move and a bot move over one deck.
pub struct GameEngine<G: Generator> {
    deck: Deck,
    bot: Bot<G>,
    player: Player,
    status: GameStatus,
    moves: usize,
    last_move: MoveReport,
}

impl<G: Generator> GameEngine<G> {
    pub fn new(deck: Deck, bot: Bot<G>, player: Player) -> Self {
        Self {
            last_move: MoveReport::initial(deck.remaining()),
            deck,
            bot,
            player,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Engine over a fresh deck of `count` items.
    pub fn with_deck(count: i64, bot: Bot<G>) -> Self {
        Self::new(Deck::new(count), bot, Player::new())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_deck_ended(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn last_move(&self) -> MoveReport {
        self.last_move
    }

    /// Apply only the player's take, without checking for a winner.
    pub fn player_move(&mut self, count: i64) {
        self.player.take_from_deck(&mut self.deck, count);
        self.moves += 1;
    }

    /// Apply only the bot's take and return the amount taken.
    pub fn bot_move(&mut self) -> i64 {
        let took = self.bot.take_from_deck(&mut self.deck);
        if took > 0 {
            self.moves += 1;
        }
        took
    }

    /// Play one round: the player takes `count`, then the bot answers
    /// unless the player emptied the deck.
    pub fn make_move(&mut self, count: i64) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        self.player_move(count);
        if self.is_deck_ended() {
            return Ok(self.finish(count, None, Winner::Player));
        }

        let bot_took = self.bot_move();
        if self.is_deck_ended() {
            return Ok(self.finish(count, Some(bot_took), Winner::Bot));
        }

        self.last_move = MoveReport {
            winner: None,
            remaining: self.deck.remaining(),
            player_took: count,
            bot_took: Some(bot_took),
        };
        Ok(self.status)
    }

    fn finish(&mut self, player_took: i64, bot_took: Option<i64>, winner: Winner) -> GameStatus {
        log::info!("{} emptied the deck after {} moves", winner, self.moves);
        self.status = GameStatus::Won(winner);
        self.last_move = MoveReport {
            winner: Some(winner),
            remaining: self.deck.remaining(),
            player_took,
            bot_took,
        };
        self.status
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            remaining: self.deck.remaining(),
            status: self.status,
            moves: self.moves,
        }
    }
}
