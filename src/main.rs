mod app;
mod bot;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::{Cli, Commands};
use config::Config;
use consts::{DEFAULT_LEADERBOARD_LIMIT, DEFAULT_USER};
use error::AppError;
use output::NumberFormat;
use store::LogStore;
use utils::Timezone;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let db_path = cli.db.clone().unwrap_or_else(Config::default_db_path);
    let store = LogStore::open(&db_path)?;

    let username = cli.user.as_deref().unwrap_or(DEFAULT_USER);

    let ctx = CommandContext {
        store: &store,
        username,
        timezone,
        json: cli.json,
        use_color: cli.use_color(),
        number_format,
    };

    match &cli.command {
        Commands::Record { steps, date } => app::handle_record(&ctx, *steps, date),
        Commands::Stats => app::handle_stats(&ctx),
        Commands::Leaderboard { limit } => {
            let limit = (*limit).or(config.limit).unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
            app::handle_leaderboard(&ctx, limit)
        }
        Commands::Chat { text } => app::handle_chat(&ctx, text),
    }
}
