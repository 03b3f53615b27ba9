//! The interactive menu entry point.

use tracing::info;

use crate::cli::menu::Dispatcher;
use crate::cli::prompt::TerminalPrompter;
use crate::cli::{banner, output, paths, RunArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::{self, Gateway};

pub fn execute(args: RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(database) = args.database {
        config.database.url = database;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    if args.no_banner {
        output::header(env!("CARGO_PKG_VERSION"));
    } else {
        banner::print_banner();
    }

    paths::ensure_home_dir()?;
    let pool = store::create_pool(&config.database.url, config.database.max_connections)?;
    store::run_migrations(&pool)?;
    info!(database = %config.database.url, "roster starting");

    let gateway = Gateway::new(pool);
    let mut dispatcher = Dispatcher::new(gateway, TerminalPrompter::new());
    dispatcher.run()?;

    output::note("Goodbye.");
    Ok(())
}
