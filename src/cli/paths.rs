//! Path utilities for roster.
//!
//! All data lives under `~/.roster/`:
//! - `~/.roster/config.toml` - main configuration
//! - `~/.roster/roster.db` - company database

use std::path::PathBuf;

/// Returns the roster home directory (`~/.roster/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roster")
}

/// Returns the default config file path (`~/.roster/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.roster/roster.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("roster.db")
}

/// Ensures the roster home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_roster_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".roster"));
        assert!(config.to_string_lossy().contains(".roster"));
        assert!(db.to_string_lossy().contains(".roster"));
    }
}
