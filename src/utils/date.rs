use chrono::{Duration, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::utils::Timezone;

/// A log date as the user wrote it, before timezone resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateSpec {
    Today,
    Yesterday,
    Explicit(NaiveDate),
}

impl DateSpec {
    pub(crate) fn parse(s: &str) -> Result<Self, AppError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("today") {
            return Ok(DateSpec::Today);
        }
        if trimmed.eq_ignore_ascii_case("yesterday") {
            return Ok(DateSpec::Yesterday);
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(DateSpec::Explicit)
            .map_err(|_| AppError::InvalidDate {
                input: trimmed.to_string(),
            })
    }

    /// Resolve to a calendar date; today/yesterday depend on the timezone.
    pub(crate) fn resolve(self, tz: Timezone) -> NaiveDate {
        match self {
            DateSpec::Today => tz.today(),
            DateSpec::Yesterday => tz.today() - Duration::days(1),
            DateSpec::Explicit(date) => date,
        }
    }
}
