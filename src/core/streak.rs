//! Consecutive-day streak computation
//!
//! Operates on the distinct set of dates a user has logged; duplicate
//! same-day entries must already be collapsed by the caller.

use chrono::NaiveDate;

/// Length of the run of consecutive days ending at the most recent date.
///
/// `dates` must be distinct and ascending. Any gap other than exactly one
/// calendar day starts a new run; the returned streak is the length of the
/// final run, whether or not it reaches today.
pub(crate) fn current_streak(dates: &[NaiveDate]) -> i64 {
    let mut streak = 0;
    let mut prev: Option<NaiveDate> = None;
    for &date in dates {
        match prev {
            Some(p) if (date - p).num_days() == 1 => streak += 1,
            _ => streak = 1,
        }
        prev = Some(date);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn days_back(end: NaiveDate, offsets: &[i64]) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> =
            offsets.iter().map(|&o| end - Duration::days(o)).collect();
        dates.sort();
        dates
    }

    #[test]
    fn empty_has_no_streak() {
        assert_eq!(current_streak(&[]), 0);
    }

    #[test]
    fn single_date_is_streak_of_one() {
        assert_eq!(current_streak(&[d(2025, 4, 10)]), 1);
    }

    #[test]
    fn four_consecutive_days() {
        let dates = days_back(d(2025, 4, 10), &[3, 2, 1, 0]);
        assert_eq!(current_streak(&dates), 4);
    }

    #[test]
    fn gap_restarts_the_run() {
        // {D-5, D-3, D-2, D-1, D}: the run ending at D covers D-3..D.
        let dates = days_back(d(2025, 4, 10), &[5, 3, 2, 1, 0]);
        assert_eq!(current_streak(&dates), 4);
    }

    #[test]
    fn only_final_run_counts() {
        // Long early run, short recent run.
        let dates = days_back(d(2025, 4, 10), &[10, 9, 8, 7, 6, 1, 0]);
        assert_eq!(current_streak(&dates), 2);
    }

    #[test]
    fn isolated_latest_date_is_one() {
        let dates = days_back(d(2025, 4, 10), &[7, 6, 0]);
        assert_eq!(current_streak(&dates), 1);
    }

    #[test]
    fn all_gaps_means_one() {
        let dates = days_back(d(2025, 4, 10), &[8, 4, 0]);
        assert_eq!(current_streak(&dates), 1);
    }

    #[test]
    fn streak_across_month_boundary() {
        let dates = vec![d(2025, 1, 30), d(2025, 1, 31), d(2025, 2, 1), d(2025, 2, 2)];
        assert_eq!(current_streak(&dates), 4);
    }

    #[test]
    fn streak_across_leap_day() {
        let dates = vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)];
        assert_eq!(current_streak(&dates), 3);
    }

    #[test]
    fn non_leap_february_gap() {
        // Feb 28 -> Mar 1 is consecutive only in non-leap years.
        let dates = vec![d(2025, 2, 28), d(2025, 3, 1)];
        assert_eq!(current_streak(&dates), 2);
    }
}
