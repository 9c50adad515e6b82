//! Configuration tests

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

/// Non-default values, including ones that need escaping, survive the file
#[test]
fn test_config_roundtrip_custom() {
    let config = Config {
        data: r#"C:\data\"math".json"#.to_string(),
        initial_grade: "1".to_string(),
        initial_domain: None,
        theme: "High Contrast".to_string(),
        label_width: 40,
        enable_tui: true,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/tmp/sb-logs"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "sb".to_string(),
        },
    };

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(file, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config, Config::default());
    assert_eq!(config.data, "standards-data.json");
    assert_eq!(config.initial_grade, "K");
    assert_eq!(config.initial_domain.as_deref(), Some("CC"));
    assert_eq!(config.label_width, 25);
    assert!(config.enable_tui);
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
data = "https://example.org/standards.json"
initial_grade = "3"
initial_domain = "NF"
label_width = 30

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);
    assert_eq!(config.data, "https://example.org/standards.json");
    assert_eq!(config.initial_grade, "3");
    assert_eq!(config.initial_domain.as_deref(), Some("NF"));
    assert_eq!(config.label_width, 30);
    assert_eq!(config.logging.level, "warn");
    // Unset keys keep their defaults
    assert_eq!(config.theme, "Dark");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
data = "from-file.json"
initial_grade = "3"
theme = "Light"
"#,
    )
    .unwrap();

    let env = env_of(&[
        ("STANDARDS_DATA", "from-env.json"),
        ("STANDARDS_GRADE", "K"),
        ("STANDARDS_THEME", "High Contrast"),
    ]);
    let config = Config::resolve(file, env);
    assert_eq!(config.data, "from-env.json");
    assert_eq!(config.initial_grade, "K");
    assert_eq!(config.theme, "High Contrast");
}

#[test]
fn test_empty_initial_domain_disables_it() {
    let file: FileConfig = toml::from_str(r#"initial_domain = """#).unwrap();
    assert_eq!(Config::resolve(file, no_env).initial_domain, None);
}

#[test]
fn test_no_tui_flag() {
    for value in ["1", "true", "TRUE"] {
        let config = Config::resolve(
            FileConfig::default(),
            env_of(&[("STANDARDS_NO_TUI", value)]),
        );
        assert!(!config.enable_tui, "STANDARDS_NO_TUI={value}");
    }

    let config = Config::resolve(FileConfig::default(), env_of(&[("STANDARDS_NO_TUI", "0")]));
    assert!(config.enable_tui);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let parsed: Result<FileConfig, _> = toml::from_str(r#"label_width = "wide""#);
    assert!(parsed.is_err());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/standards-browser/config.toml"));
    }
}
