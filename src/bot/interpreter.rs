//! Chat command interpreter
//!
//! Maps free message text onto one of four intents. Matching is literal
//! keyword matching; there is no ambiguity resolution beyond first match.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::MENTION;
use crate::error::AppError;
use crate::utils::DateSpec;

/// What the user asked the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    /// "@steptrek 10000 steps yesterday"
    RecordSteps { steps: u32, date: DateSpec },
    /// "@steptrek stats"
    ShowStats,
    /// "@steptrek leaderboard"
    ShowLeaderboard,
    /// "@steptrek log" - how-to-log explainer
    ShowLogHelp,
    /// Any other mention, or the bare word "help"
    ShowHelp,
}

static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@steptrek\s+(\d+)\s+steps\s+(yesterday|today|[\d-]+)")
        .expect("record pattern")
});
static STATS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@steptrek\s+stats").expect("stats pattern"));
static LEADERBOARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@steptrek\s+leaderboard").expect("leaderboard pattern"));
static LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@steptrek\s+log").expect("log pattern"));

/// Parse one message. `None` means the message is not for the bot and gets
/// no reply. A malformed step count or date in an otherwise well-formed
/// record command is surfaced so the caller can answer with a correction.
pub(crate) fn parse_message(text: &str) -> Result<Option<Intent>, AppError> {
    let text = text.trim();

    if let Some(caps) = RECORD_RE.captures(text) {
        let steps: u32 = caps[1].parse().map_err(|_| AppError::InvalidSteps {
            input: caps[1].to_string(),
        })?;
        let date = DateSpec::parse(&caps[2])?;
        return Ok(Some(Intent::RecordSteps { steps, date }));
    }
    if STATS_RE.is_match(text) {
        return Ok(Some(Intent::ShowStats));
    }
    if LEADERBOARD_RE.is_match(text) {
        return Ok(Some(Intent::ShowLeaderboard));
    }
    if LOG_RE.is_match(text) {
        return Ok(Some(Intent::ShowLogHelp));
    }
    if text.to_lowercase().contains(MENTION) || text.eq_ignore_ascii_case("help") {
        return Ok(Some(Intent::ShowHelp));
    }
    Ok(None)
}
