//! Log Store - the append-only step_logs table
//!
//! One SQLite connection, injected into every command handler. Each query
//! returns an explicit typed struct; date text is parsed here and nowhere
//! else.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, params};

use crate::consts::DATE_FORMAT;
use crate::core::{LeaderboardRow, UserAggregate};
use crate::error::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS step_logs (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    username   TEXT    NOT NULL,
    step_count INTEGER NOT NULL,
    log_date   TEXT    NOT NULL,
    created_at TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_step_logs_user ON step_logs(username);
CREATE INDEX IF NOT EXISTS idx_step_logs_date ON step_logs(log_date);
";

pub(crate) struct LogStore {
    conn: Connection,
}

impl LogStore {
    /// Open or create the step log at `path`, creating parent directories
    /// as needed. The schema is initialized on every open.
    pub(crate) fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = LogStore { conn };
        store.conn.execute_batch(SCHEMA)?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: std::path::PathBuf::from(":memory:"),
            source,
        })?;
        let store = LogStore { conn };
        store.conn.execute_batch(SCHEMA)?;
        Ok(store)
    }

    /// Append one entry and return its row id.
    pub(crate) fn insert(
        &self,
        username: &str,
        step_count: i64,
        log_date: NaiveDate,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO step_logs (username, step_count, log_date) VALUES (?1, ?2, ?3)",
            params![username, step_count, log_date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overall aggregate for one user; `None` when they have no rows.
    ///
    /// `days_logged` is COUNT(*): duplicate same-day rows each count, as in
    /// the leaderboard's totals. Only the streak collapses duplicates.
    pub(crate) fn user_aggregate(&self, username: &str) -> Result<Option<UserAggregate>, StoreError> {
        // Raw aggregate row before date parsing.
        struct RawAggregate {
            total_steps: i64,
            avg_steps: f64,
            days_logged: i64,
            best_day: i64,
            first_log: String,
            last_log: String,
        }

        let raw = self.conn.query_row(
            "SELECT SUM(step_count), AVG(step_count), COUNT(*), MAX(step_count),
                    MIN(log_date), MAX(log_date)
             FROM step_logs
             WHERE username = ?1",
            params![username],
            |row| {
                // SUM is NULL on an empty group even though COUNT(*) is 0.
                let total: Option<i64> = row.get(0)?;
                match total {
                    None => Ok(None),
                    Some(total_steps) => Ok(Some(RawAggregate {
                        total_steps,
                        avg_steps: row.get(1)?,
                        days_logged: row.get(2)?,
                        best_day: row.get(3)?,
                        first_log: row.get(4)?,
                        last_log: row.get(5)?,
                    })),
                }
            },
        )?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        Ok(Some(UserAggregate {
            total_steps: raw.total_steps,
            avg_steps: raw.avg_steps,
            days_logged: raw.days_logged,
            best_day: raw.best_day,
            first_log: parse_stored_date(&raw.first_log)?,
            last_log: parse_stored_date(&raw.last_log)?,
        }))
    }

    /// Distinct log dates for one user, ascending. Feeds the streak
    /// computation; callers treat any failure here as a zero streak.
    pub(crate) fn distinct_dates(&self, username: &str) -> Result<Vec<NaiveDate>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT log_date FROM step_logs WHERE username = ?1 ORDER BY log_date",
        )?;
        let rows = stmt.query_map(params![username], |row| row.get::<_, String>(0))?;

        let mut dates = Vec::new();
        for raw in rows {
            dates.push(parse_stored_date(&raw?)?);
        }
        Ok(dates)
    }

    /// Per-user totals ordered by total steps descending, username ascending
    /// as the tie-break, truncated to `limit`.
    pub(crate) fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT username, SUM(step_count) AS total_steps,
                    COUNT(DISTINCT log_date), MAX(log_date)
             FROM step_logs
             GROUP BY username
             ORDER BY total_steps DESC, username ASC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut board = Vec::new();
        for row in rows {
            let (username, total_steps, days_active, last_raw) = row?;
            board.push(LeaderboardRow {
                username,
                total_steps,
                days_active,
                last_log: parse_stored_date(&last_raw)?,
            });
        }
        Ok(board)
    }

    /// Bypass date formatting to plant a bad row; exercises the streak
    /// degradation path.
    #[cfg(test)]
    pub(crate) fn raw_insert_for_tests(&self, username: &str, step_count: i64, log_date: &str) {
        self.conn
            .execute(
                "INSERT INTO step_logs (username, step_count, log_date) VALUES (?1, ?2, ?3)",
                params![username, step_count, log_date],
            )
            .unwrap();
    }
}

fn parse_stored_date(raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| StoreError::MalformedDate {
        value: raw.to_string(),
    })
}
