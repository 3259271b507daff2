mod format;
mod json;
mod table;

pub(crate) use format::{NumberFormat, format_number};
pub(crate) use json::{output_leaderboard_json, output_record_json, output_stats_json};
pub(crate) use table::{
    TableOptions, print_help, print_leaderboard_table, print_log_help, print_stats_card,
};
