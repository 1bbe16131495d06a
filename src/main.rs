use bashe::prelude::*;
use bashe::{init_logging, DEFAULT_DECK_SIZE};

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum BotKind {
    /// Random takes in 1..=3.
    Random,
    /// Always takes one item.
    Fixed,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_DECK_SIZE, help = "Items in the deck at the start")]
        deck: i64,
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        bot: BotKind,
    },
}

fn build_bot(kind: BotKind, config: &GameConfig, seed: Option<u64>) -> Bot<Box<dyn Generator + Send>> {
    let generator: Box<dyn Generator + Send> = match kind {
        BotKind::Random => {
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            Box::new(RangeGenerator::new(rng, config.bot_ceil))
        }
        BotKind::Fixed => Box::new(ConstGenerator(1)),
    };
    Bot::new(generator)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, deck, bot } => {
            if deck <= 0 {
                return Err(anyhow::anyhow!("Deck size must be positive, got {}", deck));
            }
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig::new(deck);
            let bot = build_bot(bot, &config, seed);
            let mut session = GameSession::new(config, bot);
            let input = BufReader::new(tokio::io::stdin());
            run_cli(&mut session, input).await?;
        }
    }
    Ok(())
}
