/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Mention keyword the chat interpreter responds to
pub(crate) const MENTION: &str = "@steptrek";

/// Default leaderboard size when neither CLI nor config sets one
pub(crate) const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;

/// Fallback display name when the transport supplies none
pub(crate) const DEFAULT_USER: &str = "User";
