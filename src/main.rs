use clap::Parser;

use roster::cli::{check, migrate, output, run, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => run::execute(args),
        Commands::Migrate(args) => migrate::execute(args),
        Commands::Check(command) => check::execute(command),
    };

    if let Err(err) = result {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
