use bashe::{level_from, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some("bogus")), LevelFilter::Info);
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(LOG_ENV, "BASHE_LOG");
}
