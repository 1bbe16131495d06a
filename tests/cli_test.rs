#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use bashe::player::cli::format_report;
    use bashe::{
        parse_take, run_cli, Bot, ConstGenerator, GameConfig, GameSession, GameStatus,
        MoveReport, Winner,
    };

    fn fixed_session() -> GameSession<ConstGenerator> {
        GameSession::new(GameConfig::default(), Bot::new(ConstGenerator(1)))
    }

    #[test]
    fn test_parse_take() {
        assert_eq!(parse_take(" 2 "), Ok(Some(2)));
        assert_eq!(parse_take(""), Ok(None));
        assert_eq!(parse_take("-1"), Ok(Some(-1)));
        assert!(parse_take("two").is_err());
    }

    #[test]
    fn test_format_report() {
        assert_eq!(format_report(&MoveReport::initial(15)), "Items in deck: 15");
        let report = MoveReport {
            winner: None,
            remaining: 12,
            player_took: 2,
            bot_took: Some(1),
        };
        assert_eq!(
            format_report(&report),
            "You took 2, bot took 1. Items in deck: 12"
        );
        let report = MoveReport {
            winner: Some(Winner::Player),
            remaining: 0,
            player_took: 1,
            bot_took: None,
        };
        assert_eq!(format_report(&report), "You took 1. Items in deck: 0 - you win!");
    }

    #[tokio::test]
    async fn test_cli_game_skips_bad_lines() {
        let mut session = fixed_session();
        let input: &[u8] = b"abc\n5\n\nhelp\n1\n1\n1\n1\n1\n1\n1\n1\n";
        let status = run_cli(&mut session, input).await.unwrap();
        assert_eq!(status, GameStatus::Won(Winner::Player));
        assert_eq!(session.remaining(), 0);
    }

    #[tokio::test]
    async fn test_cli_game_ends_with_input() {
        let mut session = fixed_session();
        let input: &[u8] = b"1\n";
        let status = run_cli(&mut session, input).await.unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(session.remaining(), 13);
    }
}
