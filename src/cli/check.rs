//! Diagnostic checks.

use std::path::Path;

use crate::cli::{output, CheckCommand};
use crate::config::Config;
use crate::error::Result;

pub fn execute(command: CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Config(args) => {
            let config = Config::load(&args.config)?;
            output::section("Configuration");
            output::field("Database", &config.database.url);
            output::field("Pool size", config.database.max_connections);
            output::field("Log level", &config.logging.level);
            output::field("Log format", &config.logging.format);
            if config.database.url != ":memory:" && !Path::new(&config.database.url).exists() {
                output::warning("Database file does not exist yet; run `roster migrate` to create it");
            }
            output::success("Configuration is valid");
            Ok(())
        }
    }
}
