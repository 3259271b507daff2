//! Aggregation engine
//!
//! Thin orchestration over the store's typed queries. Every call reads the
//! log fresh; nothing is cached between commands.

use chrono::NaiveDate;

use crate::core::streak::current_streak;
use crate::core::types::{LeaderboardRow, UserStats};
use crate::error::{AppError, StoreError};
use crate::store::LogStore;

/// Full summary for one user, or `None` when they have no entries at all.
///
/// The streak sub-computation is best-effort: if the distinct-dates query
/// fails (or a stored date is malformed) the summary still comes back with
/// `current_streak = 0`. A failure of the primary aggregate propagates.
pub(crate) fn user_stats(store: &LogStore, username: &str) -> Result<Option<UserStats>, AppError> {
    if username.trim().is_empty() {
        return Err(AppError::EmptyUser);
    }

    let Some(agg) = store.user_aggregate(username)? else {
        return Ok(None);
    };

    let streak = match store.distinct_dates(username) {
        Ok(dates) => current_streak(&dates),
        Err(e) => {
            eprintln!("Warning: streak computation failed for {username}: {e}");
            0
        }
    };

    Ok(Some(UserStats::from_aggregate(
        username.to_string(),
        agg,
        streak,
    )))
}

/// Top users by total steps. At most `limit` rows; empty when nobody has
/// logged anything yet.
pub(crate) fn leaderboard(store: &LogStore, limit: u32) -> Result<Vec<LeaderboardRow>, StoreError> {
    store.leaderboard(limit)
}

/// Append one entry and return its row id. Same-date entries accumulate;
/// nothing is merged or overwritten.
pub(crate) fn record(
    store: &LogStore,
    username: &str,
    steps: u32,
    date: NaiveDate,
) -> Result<i64, AppError> {
    if username.trim().is_empty() {
        return Err(AppError::EmptyUser);
    }
    Ok(store.insert(username, i64::from(steps), date)?)
}
