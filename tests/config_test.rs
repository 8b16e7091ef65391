//! Tests for game configuration loading.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use strictly_creatures::GameConfig;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.api_base_url(), "https://pokeapi.co/api/v2");
    assert_eq!(*config.min_id(), 1);
    assert_eq!(*config.max_id(), 898);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(&path, "max_id = 151\nrequest_timeout_ms = 2500\n").expect("Write failed");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.min_id(), 1);
    assert_eq!(*config.max_id(), 151);
    assert_eq!(config.request_timeout(), Duration::from_millis(2500));
    assert_eq!(config.api_base_url(), "https://pokeapi.co/api/v2");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");
    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_reversed_range_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(&path, "min_id = 500\nmax_id = 100\n").expect("Write failed");
    let err = GameConfig::from_file(&path).expect_err("Reversed range should fail");
    assert!(err.message.contains("min_id"));
}

#[test]
fn test_new_validates() {
    assert!(GameConfig::new("https://pokeapi.co/api/v2".into(), 1000, 1, 151).is_ok());
    assert!(GameConfig::new("".into(), 1000, 1, 151).is_err());
    assert!(GameConfig::new("http://x".into(), 0, 1, 151).is_err());
    assert!(GameConfig::new("http://x".into(), 1000, 0, 151).is_err());
}
