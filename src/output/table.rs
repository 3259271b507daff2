//! Terminal rendition of the bot's cards
//!
//! The chat platform rendered these as visual cards; here they are
//! comfy-table output with the same fields in the same order.

use comfy_table::{Cell, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL};

use crate::consts::{DATE_FORMAT, MENTION};
use crate::core::{LeaderboardRow, UserStats};
use crate::output::format::{NumberFormat, format_number, format_streak, header_cell, right_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Per-user stats card: one fact per row.
pub(crate) fn print_stats_card(stats: &UserStats, opts: TableOptions) {
    let fmt = opts.number_format;
    let mut table = base_table();
    table.set_header(vec![
        header_cell(&format!("{}'s Step Stats", stats.username), opts.use_color),
        header_cell("", opts.use_color),
    ]);

    let rows: Vec<(&str, String)> = vec![
        ("Total Steps", format_number(stats.total_steps, fmt)),
        ("Days Logged", format_number(stats.days_logged, fmt)),
        (
            "Average Steps/Day",
            format_number(stats.avg_steps.round() as i64, fmt),
        ),
        ("Best Day", format_number(stats.best_day, fmt)),
        ("Current Streak", format_streak(stats.current_streak)),
        ("First Log", stats.first_log.format(DATE_FORMAT).to_string()),
        ("Latest Log", stats.last_log.format(DATE_FORMAT).to_string()),
    ];
    for (title, value) in rows {
        table.add_row(vec![Cell::new(title), right_cell(value)]);
    }

    println!("{table}");
}

fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("{}.", index + 1),
    }
}

/// Leaderboard card: medals for the podium, numeric ranks below.
pub(crate) fn print_leaderboard_table(rows: &[LeaderboardRow], opts: TableOptions) {
    let fmt = opts.number_format;
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Rank", opts.use_color),
        header_cell("Name", opts.use_color),
        header_cell("Steps", opts.use_color),
        header_cell("Days", opts.use_color),
        header_cell("Last Log", opts.use_color),
    ]);

    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank_label(index)),
            Cell::new(&row.username),
            right_cell(format_number(row.total_steps, fmt)),
            right_cell(format_number(row.days_active, fmt)),
            Cell::new(row.last_log.format(DATE_FORMAT).to_string()),
        ]);
    }

    println!("{table}");
}

/// Main menu card turned command reference.
pub(crate) fn print_help(use_color: bool) {
    println!("Step Tracker - log your daily steps and compete with colleagues.\n");
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Command", use_color),
        header_cell("What it does", use_color),
    ]);
    table.add_row(vec![
        Cell::new(format!("{MENTION} [number] steps [date]")),
        Cell::new("Log steps for today, yesterday, or a YYYY-MM-DD date"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{MENTION} stats")),
        Cell::new("Show your personal step statistics"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{MENTION} leaderboard")),
        Cell::new("Show the top steppers"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{MENTION} log")),
        Cell::new("Show how to log steps"),
    ]);
    println!("{table}");
}

/// The step-log form card turned usage examples.
pub(crate) fn print_log_help(use_color: bool) {
    println!("To log your steps, use: {MENTION} [number] steps [date]\n");
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Example", use_color),
        header_cell("", use_color),
    ]);
    table.add_row(vec![
        Cell::new("Today"),
        Cell::new(format!("{MENTION} 8000 steps today")),
    ]);
    table.add_row(vec![
        Cell::new("Yesterday"),
        Cell::new(format!("{MENTION} 10000 steps yesterday")),
    ]);
    table.add_row(vec![
        Cell::new("Specific date"),
        Cell::new(format!("{MENTION} 12000 steps 2025-02-15")),
    ]);
    println!("{table}");
}
