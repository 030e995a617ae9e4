//! Consecutive compliant-day counting.

use crate::backend::domain::models::checkin::CheckinRecord;

/// Derives the current streak from a user's check-in history.
///
/// The history must be ordered by date, most recent first. The scan counts
/// compliant records until the first non-compliant one. Days with no record
/// at all are skipped rather than treated as a break, so a user who stops
/// checking in keeps their streak.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakCalculator;

impl StreakCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_streak(&self, history: &[CheckinRecord]) -> u32 {
        debug_assert!(
            history.windows(2).all(|pair| pair[0].date > pair[1].date),
            "check-in history must be strictly descending by date"
        );

        let mut streak = 0;
        for record in history {
            if !record.compliant {
                break;
            }
            streak += 1;
        }
        streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn record(date: NaiveDate, compliant: bool) -> CheckinRecord {
        CheckinRecord {
            user_id: "user-1".to_string(),
            date,
            compliant,
        }
    }

    /// Consecutive days ending at 2025-06-14, most recent first
    fn history(flags: &[bool]) -> Vec<CheckinRecord> {
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        flags
            .iter()
            .enumerate()
            .map(|(i, &compliant)| record(today - Duration::days(i as i64), compliant))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(StreakCalculator::new().compute_streak(&[]), 0);
    }

    #[test]
    fn test_single_compliant_day() {
        assert_eq!(StreakCalculator::new().compute_streak(&history(&[true])), 1);
    }

    #[test]
    fn test_single_non_compliant_day() {
        assert_eq!(StreakCalculator::new().compute_streak(&history(&[false])), 0);
    }

    #[test]
    fn test_stops_at_first_non_compliant() {
        let calculator = StreakCalculator::new();
        assert_eq!(calculator.compute_streak(&history(&[true, true, false, true])), 2);
    }

    #[test]
    fn test_most_recent_non_compliant_resets() {
        let calculator = StreakCalculator::new();
        assert_eq!(calculator.compute_streak(&history(&[false, true, true, true])), 0);
    }

    #[test]
    fn test_all_compliant_counts_every_record() {
        let calculator = StreakCalculator::new();
        assert_eq!(calculator.compute_streak(&history(&[true; 30])), 30);
    }

    // Known and possibly unintended: a missing day does not break the streak.
    #[test]
    fn test_gap_does_not_break_streak() {
        let d0 = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let records = vec![record(d0, true), record(d2, true)];
        assert_eq!(StreakCalculator::new().compute_streak(&records), 2);
    }

    #[test]
    fn test_long_gap_before_today_is_ignored() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let month_ago = today - Duration::days(30);
        let records = vec![record(month_ago, true), record(month_ago - Duration::days(1), false)];
        assert_eq!(StreakCalculator::new().compute_streak(&records), 1);
    }

    #[test]
    fn test_input_is_not_modified() {
        let records = history(&[true, false]);
        let before = records.clone();
        let calculator = StreakCalculator::new();
        assert_eq!(calculator.compute_streak(&records), calculator.compute_streak(&records));
        assert_eq!(records, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly descending")]
    fn test_ascending_history_is_rejected_in_debug() {
        let mut records = history(&[true, true]);
        records.reverse();
        StreakCalculator::new().compute_streak(&records);
    }
}
