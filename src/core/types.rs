//! Typed aggregation results
//!
//! Every store query maps onto one of these structs; nothing downstream
//! touches raw rows.

use chrono::NaiveDate;
use serde::Serialize;

/// Raw per-user aggregate as the store computes it, before the streak
/// sub-computation is attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct UserAggregate {
    pub(crate) total_steps: i64,
    /// Row-weighted mean: per log entry, not per calendar day.
    pub(crate) avg_steps: f64,
    /// Number of log rows. Duplicate same-day entries each count.
    pub(crate) days_logged: i64,
    /// Largest single entry.
    pub(crate) best_day: i64,
    pub(crate) first_log: NaiveDate,
    pub(crate) last_log: NaiveDate,
}

/// Complete per-user summary handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UserStats {
    pub(crate) username: String,
    pub(crate) total_steps: i64,
    pub(crate) avg_steps: f64,
    pub(crate) days_logged: i64,
    pub(crate) best_day: i64,
    pub(crate) first_log: NaiveDate,
    pub(crate) last_log: NaiveDate,
    /// Consecutive distinct days ending at the most recent logged date.
    /// Zero when the streak sub-computation failed.
    pub(crate) current_streak: i64,
}

impl UserStats {
    pub(crate) fn from_aggregate(username: String, agg: UserAggregate, streak: i64) -> Self {
        UserStats {
            username,
            total_steps: agg.total_steps,
            avg_steps: agg.avg_steps,
            days_logged: agg.days_logged,
            best_day: agg.best_day,
            first_log: agg.first_log,
            last_log: agg.last_log,
            current_streak: streak,
        }
    }
}

/// One leaderboard entry. Ordered by total descending, username ascending.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LeaderboardRow {
    pub(crate) username: String,
    pub(crate) total_steps: i64,
    /// Distinct calendar days with at least one entry.
    pub(crate) days_active: i64,
    pub(crate) last_log: NaiveDate,
}
