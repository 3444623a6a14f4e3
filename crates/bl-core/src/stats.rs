//! Same-day summary statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::feeding::{FeedingLog, FeedingSession};
use crate::sleep::SleepLog;

/// Today's activity, derived from the logs at the time of the call.
///
/// Nothing here is cached: a session saved at 23:59 drops out of "today" once
/// the date rolls over and the stats are computed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub today_sleep_count: usize,
    pub today_feeding_sessions: Vec<FeedingSession>,
    pub today_feeding_count: usize,
    pub today_total_feeding_seconds: u64,
}

impl DailyStats {
    pub fn compute(sleep: &SleepLog, feeding: &FeedingLog, today: NaiveDate) -> Self {
        let today_sleep_count = sleep
            .iter()
            .filter(|e| e.timestamp.date_naive() == today)
            .count();
        let today_feeding_sessions: Vec<_> = feeding.on(today).cloned().collect();
        let today_total_feeding_seconds = today_feeding_sessions
            .iter()
            .map(|s| s.duration_seconds)
            .sum();

        Self {
            date: today,
            today_sleep_count,
            today_feeding_count: today_feeding_sessions.len(),
            today_feeding_sessions,
            today_total_feeding_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, TimeZone};

    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::sleep::SleepKind;

    #[test]
    fn empty_logs_give_zeroes() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let stats = DailyStats::compute(&SleepLog::new(), &FeedingLog::new(), today);
        assert_eq!(stats.today_sleep_count, 0);
        assert_eq!(stats.today_feeding_count, 0);
        assert_eq!(stats.today_total_feeding_seconds, 0);
        assert!(stats.today_feeding_sessions.is_empty());
    }

    #[test]
    fn only_todays_entries_are_counted() {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2025, 6, 1, 22, 0, 0).unwrap());
        let mut sleep = SleepLog::new();
        let mut feeding = FeedingLog::new();

        sleep.record_event(SleepKind::SleepStart, &clock);
        feeding.commit(600, &clock);

        clock.advance(Duration::hours(9));
        sleep.record_event(SleepKind::Wake, &clock);
        feeding.commit(300, &clock);
        clock.advance(Duration::hours(3));
        sleep.record_event(SleepKind::SleepStart, &clock);
        feeding.commit(420, &clock);

        let stats = DailyStats::compute(&sleep, &feeding, clock.today());

        assert_eq!(stats.today_sleep_count, 2);
        assert_eq!(stats.today_feeding_count, 2);
        assert_eq!(stats.today_total_feeding_seconds, 720);
        let durations: Vec<_> = stats
            .today_feeding_sessions
            .iter()
            .map(|s| s.duration_seconds)
            .collect();
        assert_eq!(durations, vec![420, 300]);
    }

    #[test]
    fn passing_midnight_changes_the_result() {
        let clock = ManualClock::new(Local.with_ymd_and_hms(2025, 6, 1, 23, 58, 0).unwrap());
        let mut feeding = FeedingLog::new();
        feeding.commit(90, &clock);

        let before = DailyStats::compute(&SleepLog::new(), &feeding, clock.today());
        assert_eq!(before.today_feeding_count, 1);

        clock.advance(Duration::minutes(5));
        let after = DailyStats::compute(&SleepLog::new(), &feeding, clock.today());
        assert_eq!(after.today_feeding_count, 0);
        assert_eq!(after.today_total_feeding_seconds, 0);
    }
}
