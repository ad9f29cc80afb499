//! Config file loading and saving against a scratch directory

use memberlist::config::AppConfig;
use memberlist::MemberListError;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("memberlist.toml");

    let config = AppConfig::new()
        .with_title("Crew")
        .with_tick_rate(Duration::from_millis(100));
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.title, "Crew");
    assert_eq!(loaded.tick_rate(), Duration::from_millis(100));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memberlist.toml");

    std::fs::write(&path, "tick_rate_ms = 0\n").unwrap();
    assert!(matches!(
        AppConfig::load_from(&path),
        Err(MemberListError::Config(_))
    ));

    std::fs::write(&path, "title = [not toml").unwrap();
    assert!(matches!(
        AppConfig::load_from(&path),
        Err(MemberListError::Config(_))
    ));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memberlist.toml");

    let result = AppConfig::new().with_title("").save_to(&path);
    assert!(result.is_err());
    assert!(!path.exists());
}
