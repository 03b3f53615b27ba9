//! Apply embedded migrations outside the interactive loop.

use crate::cli::{output, paths, MigrateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store;

pub fn execute(args: MigrateArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(database) = args.database {
        config.database.url = database;
    }

    paths::ensure_home_dir()?;

    let spinner = output::spinner("Applying migrations...");
    let result = store::create_pool(&config.database.url, config.database.max_connections)
        .and_then(|pool| store::run_migrations(&pool));

    match result {
        Ok(()) => {
            output::spinner_success(&spinner, "Database is up to date");
            output::field("Database", &config.database.url);
            output::note(&format!(
                "Start the interactive menu with {}",
                output::highlight("roster run")
            ));
            Ok(())
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Migration failed");
            Err(err)
        }
    }
}
