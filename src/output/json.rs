use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::core::{LeaderboardRow, UserStats};

pub(crate) fn output_stats_json(stats: &UserStats) -> String {
    serde_json::json!({
        "username": stats.username,
        "total_steps": stats.total_steps,
        "avg_steps": stats.avg_steps,
        "days_logged": stats.days_logged,
        "best_day": stats.best_day,
        "first_log": stats.first_log.format(DATE_FORMAT).to_string(),
        "last_log": stats.last_log.format(DATE_FORMAT).to_string(),
        "current_streak": stats.current_streak,
    })
    .to_string()
}

pub(crate) fn output_leaderboard_json(rows: &[LeaderboardRow]) -> String {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::json!({
                "rank": index + 1,
                "username": row.username,
                "total_steps": row.total_steps,
                "days_active": row.days_active,
                "last_log": row.last_log.format(DATE_FORMAT).to_string(),
            })
        })
        .collect();
    serde_json::json!(output).to_string()
}

pub(crate) fn output_record_json(id: i64, username: &str, steps: u32, date: NaiveDate) -> String {
    serde_json::json!({
        "id": id,
        "username": username,
        "steps": steps,
        "log_date": date.format(DATE_FORMAT).to_string(),
    })
    .to_string()
}
