//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log a step count for a date
    Record {
        /// Number of steps
        steps: u32,
        /// today, yesterday, or YYYY-MM-DD (default: today)
        #[arg(default_value = "today")]
        date: String,
    },
    /// Show your step statistics
    Stats,
    /// Show the top steppers
    Leaderboard {
        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },
    /// Feed one chat message through the bot and print its reply
    Chat {
        /// The message text, e.g. "@steptrek 8000 steps today"
        text: String,
    },
}
