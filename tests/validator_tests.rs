use bashe::{GameConfig, MoveError, TakeValidator, Validate};

#[test]
fn test_accepts_one_to_three() {
    let validator = TakeValidator::default();
    for n in 1..=3 {
        assert!(validator.validate(Some(n)));
    }
}

#[test]
fn test_rejects_out_of_range_and_missing() {
    let validator = TakeValidator::default();
    assert!(!validator.validate(Some(0)));
    assert!(!validator.validate(Some(4)));
    assert!(!validator.validate(Some(-1)));
    assert!(!validator.validate(None));
}

#[test]
fn test_check_reports_reason() {
    let validator = TakeValidator::default();
    assert_eq!(validator.check(Some(2), 15), Ok(2));
    assert_eq!(validator.check(None, 15), Err(MoveError::MissingInput));
    assert_eq!(validator.check(Some(4), 15), Err(MoveError::OutOfRange(4)));
    assert_eq!(
        validator.check(Some(3), 2),
        Err(MoveError::ExceedsRemaining { take: 3, remaining: 2 })
    );
}

#[test]
fn test_validator_follows_config() {
    let config = GameConfig {
        max_take: 5,
        ..GameConfig::default()
    };
    let validator = TakeValidator::from_config(&config);
    assert!(validator.validate(Some(5)));
    assert!(!validator.validate(Some(6)));
    assert_eq!(validator.min(), 1);
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::MissingInput.to_string(), "No amount entered");
    assert_eq!(
        MoveError::ExceedsRemaining { take: 3, remaining: 1 }.to_string(),
        "Cannot take 3 with only 1 left"
    );
}
