//! Config file loading and conversion to engine settings

use std::fs;

use sortviz::{Algorithm, Config};
use tempfile::TempDir;

#[test]
fn file_values_reach_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[playback]
algorithm = "insertion"
speed = 8

[sequence]
size = 30
value_min = 10
value_max = 20
seed = 5
"#,
    )
    .unwrap();

    let settings = Config::load_from(&path).unwrap().to_settings().unwrap();
    assert_eq!(settings.algorithm, Algorithm::Insertion);
    assert_eq!(settings.speed.get(), 8);
    assert_eq!(settings.size, 30);
    assert_eq!(settings.values.min, 10);
    assert_eq!(settings.values.max, 20);
    assert_eq!(settings.seed, Some(5));
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[playback\nspeed = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.toml"));
}

#[test]
fn inverted_value_range_is_rejected() {
    let config = Config::parse("[sequence]\nvalue_min = 50\nvalue_max = 10\n").unwrap();
    assert!(config.to_settings().is_err());
}

#[test]
fn default_config_serializes_both_sections() {
    let text = Config::default().to_toml().unwrap();
    assert!(text.contains("[playback]"));
    assert!(text.contains("[sequence]"));
    assert!(text.contains("algorithm = \"bubble\""));
    assert!(!text.contains("seed"));
}
