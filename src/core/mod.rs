//! Core module - aggregation engine over the step log

mod engine;
mod streak;
mod types;

pub(crate) use engine::{leaderboard, record, user_stats};
pub(crate) use types::{LeaderboardRow, UserAggregate, UserStats};
