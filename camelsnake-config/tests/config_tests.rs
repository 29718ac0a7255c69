use camelsnake_config::{Config, ConfigError, KeyBinding, LogLevel, defaults};
use std::fs;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.context_menu);
    assert!(config.convert_whole_document_when_empty);
    assert_eq!(config.log_level, LogLevel::Off);
    assert_eq!(config.keybindings, defaults::keybindings());
}

#[test]
fn test_config_yaml_round_trip() {
    let config = Config::new()
        .with_context_menu(false)
        .with_log_level(LogLevel::Debug)
        .with_keybindings(vec![KeyBinding::new("Ctrl+F9", defaults::TO_SNAKE_ACTION)]);

    let yaml = serde_yaml_ng::to_string(&config).unwrap();
    let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let parsed: Config = serde_yaml_ng::from_str("log_level: info\n").unwrap();
    assert_eq!(parsed.log_level, LogLevel::Info);
    assert!(parsed.context_menu);
    assert_eq!(parsed.keybindings.len(), 2);
}

#[test]
fn test_load_creates_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = Config::new().with_whole_document_fallback(false);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(!loaded.convert_whole_document_when_empty);
}

#[test]
fn test_load_merges_missing_default_keybindings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "keybindings:\n  - key: Ctrl+K\n    action: camelsnake.toCamel\n",
    )
    .unwrap();

    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded.keys_for_action(defaults::TO_CAMEL_ACTION), vec!["Ctrl+K"]);
    assert_eq!(
        loaded.keys_for_action(defaults::TO_SNAKE_ACTION),
        vec!["Shift+Alt+S"]
    );
}

#[test]
fn test_load_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_load_invalid_yaml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "context_menu: [not, a, bool\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_blank_action_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "keybindings:\n  - key: Ctrl+K\n    action: \"\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}
