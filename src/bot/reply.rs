//! User-facing reply text
//!
//! The wording the bot answers with. Operational error detail never appears
//! here; store failures get the generic try-again lines.

use chrono::NaiveDate;

use crate::consts::{DATE_FORMAT, MENTION};
use crate::output::{NumberFormat, format_number};

pub(crate) fn logged(username: &str, steps: u32, date: NaiveDate, fmt: NumberFormat) -> String {
    format!(
        "Thanks, {username}! I've logged {} steps for {}.",
        format_number(i64::from(steps), fmt),
        date.format(DATE_FORMAT)
    )
}

pub(crate) fn no_stats_yet(username: &str) -> String {
    format!(
        "No step data found for you yet, {username}. Start logging your steps with \"{MENTION} [number] steps [date]\"."
    )
}

pub(crate) fn empty_leaderboard() -> &'static str {
    "No step data has been logged yet. Start tracking steps to appear on the leaderboard!"
}

pub(crate) fn record_failed() -> &'static str {
    "Sorry, I couldn't log your steps right now. Please try again later."
}

pub(crate) fn stats_failed() -> &'static str {
    "Sorry, I couldn't retrieve your stats right now. Please try again later."
}

pub(crate) fn leaderboard_failed() -> &'static str {
    "Sorry, I couldn't retrieve the leaderboard right now. Please try again later."
}

pub(crate) fn bad_steps() -> &'static str {
    "Sorry, I couldn't understand that step count. Please use a whole number of steps."
}

pub(crate) fn bad_date() -> &'static str {
    "Sorry, I couldn't understand that date. Please try again with 'yesterday', 'today', or a specific date (YYYY-MM-DD)."
}
