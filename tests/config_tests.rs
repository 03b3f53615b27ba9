use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use roster::config::Config;
use roster::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("roster-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_a_complete_file() {
    let toml = r#"
[database]
url = "company.db"
max_connections = 4

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("load config");
    let _ = fs::remove_file(&path);

    assert_eq!(config.database.url, "company.db");
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_missing_file_falls_back_to_defaults() {
    let config = Config::load("/nonexistent/roster-config.toml").expect("default config");
    assert_eq!(config.database.max_connections, 10);
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn config_rejects_invalid_log_format() {
    let toml = r#"
[logging]
format = "xml"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. })) => {}
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid format to be rejected, got {}",
            config.logging.format
        ),
    }
}

#[test]
fn config_rejects_zero_pool_size() {
    let toml = r#"
[database]
url = "company.db"
max_connections = 0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_connections",
                ..
            }))
        ),
        "Expected zero pool size to be rejected"
    );
}

#[test]
fn config_rejects_malformed_toml() {
    let path = write_temp_config("[database\nurl = ");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}
