use bashe::{
    init_logging, run_strategy, Bot, GameConfig, GameSession, RandomPlayer, RangeGenerator, DEFAULT_DECK_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [deck]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let deck: i64 = match args.get(2) {
        Some(d) => d.parse()?,
        None => DEFAULT_DECK_SIZE,
    };
    if deck <= 0 {
        return Err(anyhow::anyhow!("Deck size must be positive, got {}", deck));
    }

    let config = GameConfig::new(deck);
    let bot = Bot::new(RangeGenerator::new(
        SmallRng::seed_from_u64(seed),
        config.bot_ceil,
    ));
    let mut player = RandomPlayer::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));
    let mut session = GameSession::new(config, bot);

    let status = run_strategy(&mut session, &mut player)?;
    let state = session.state();

    let result = json!({
        "winner": status.winner(),
        "remaining": state.remaining,
        "moves": state.moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
