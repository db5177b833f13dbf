use one_hand_cursor::settings::Settings;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(&path.to_string_lossy()).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.enabled);
    assert!(!settings.debug_logging);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true }"#).unwrap();

    let settings = Settings::load(&path.to_string_lossy()).unwrap();
    assert!(settings.debug_logging);
    assert!(settings.enabled);
    assert_eq!(settings.log_path(), None);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_string_lossy();

    let settings = Settings {
        enabled: false,
        debug_logging: true,
        log_file: Some("logs/cursor.log".into()),
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.log_path(), Some(PathBuf::from("logs/cursor.log")));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Settings::load(&path.to_string_lossy()).unwrap_err();
    assert!(format!("{err:#}").contains("deserialize settings file"));
}
