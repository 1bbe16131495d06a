use bashe::{
    Bot, ConstGenerator, GameConfig, GameSession, GameStatus, MoveError, MoveReport, Winner,
};

fn fixed_session(deck: i64) -> GameSession<ConstGenerator> {
    GameSession::new(GameConfig::new(deck), Bot::new(ConstGenerator(1)))
}

#[test]
fn test_stream_starts_with_initial_report() {
    let session = fixed_session(15);
    let results = session.subscribe();
    assert_eq!(*results.borrow(), MoveReport::initial(15));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_accepted_move_is_published() {
    let mut session = fixed_session(15);
    let mut results = session.subscribe();
    let report = session.submit(Some(2)).unwrap();
    assert_eq!(
        report,
        MoveReport {
            winner: None,
            remaining: 12,
            player_took: 2,
            bot_took: Some(1),
        }
    );
    assert!(results.has_changed().unwrap());
    assert_eq!(*results.borrow_and_update(), report);
}

#[test]
fn test_rejected_move_publishes_nothing() {
    let mut session = fixed_session(15);
    let mut results = session.subscribe();
    assert_eq!(session.submit(Some(4)), Err(MoveError::OutOfRange(4)));
    assert_eq!(session.submit(None), Err(MoveError::MissingInput));
    assert!(!results.has_changed().unwrap());
    assert_eq!(session.remaining(), 15);
    assert_eq!(*results.borrow_and_update(), MoveReport::initial(15));
}

#[test]
fn test_take_above_remaining_is_rejected() {
    let mut session = fixed_session(2);
    assert_eq!(
        session.submit(Some(3)),
        Err(MoveError::ExceedsRemaining { take: 3, remaining: 2 })
    );
    assert!(!session.engine().deck().is_underflowed());
}

#[test]
fn test_finished_session_rejects_moves() {
    let mut session = fixed_session(1);
    let report = session.submit(Some(1)).unwrap();
    assert_eq!(report.winner, Some(Winner::Player));
    assert_eq!(session.submit(Some(1)), Err(MoveError::GameOver));
}

#[test]
fn test_submit_line_parses_input() {
    let mut session = fixed_session(15);
    let report = session.submit_line(" 3 ").unwrap();
    assert_eq!(report.remaining, 11);
    let err = session.submit_line("").unwrap_err();
    assert_eq!(err.to_string(), "No amount entered");
    let err = session.submit_line("lots").unwrap_err();
    assert!(err.to_string().contains("not a whole number"));
    assert_eq!(session.remaining(), 11);
}

#[test]
fn test_report_serializes_winner_name() {
    let mut session = fixed_session(1);
    let report = session.submit(Some(1)).unwrap();
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["winner"], "player");
    assert_eq!(value["remaining"], 0);
    assert!(value["bot_took"].is_null());
}

#[tokio::test]
async fn test_subscriber_task_sees_final_report() {
    let mut session = fixed_session(15);
    let mut results = session.subscribe();

    let observer = tokio::spawn(async move {
        let mut last = *results.borrow_and_update();
        while results.changed().await.is_ok() {
            last = *results.borrow_and_update();
        }
        last
    });

    for _ in 0..8 {
        session.submit(Some(1)).unwrap();
    }
    drop(session);

    let last = observer.await.unwrap();
    assert_eq!(last.winner, Some(Winner::Player));
    assert_eq!(last.remaining, 0);
}
