//! Daily API usage counter with a soft warning threshold.

use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

/// Counts upstream API calls per UTC day.
///
/// The count resets the first time `track` runs on a later day than the
/// stored one. Tracking never blocks a request and never fails; a poisoned
/// lock is recovered since the state is a pair of plain integers.
pub struct ApiUsageTracker {
    state: Mutex<UsageState>,
    daily_limit: u64,
}

struct UsageState {
    count: u64,
    reset_date: NaiveDate,
}

impl ApiUsageTracker {
    /// Start a fresh counter against `daily_limit` calls per day.
    pub fn new(daily_limit: u64) -> Self {
        Self {
            state: Mutex::new(UsageState {
                count: 0,
                reset_date: Utc::now().date_naive(),
            }),
            daily_limit,
        }
    }

    /// Register one API call and return the running count for today.
    ///
    /// Emits an info line per call and a warning once the count passes 90%
    /// of the daily limit.
    pub fn track(&self) -> u64 {
        self.track_at(Utc::now().date_naive())
    }

    fn track_at(&self, today: NaiveDate) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if today > state.reset_date {
            state.count = 0;
            state.reset_date = today;
        }
        state.count += 1;

        info!("API call count: {}", state.count);
        if state.count > self.warn_threshold() {
            warn!("Approaching API limit: {}/{}", state.count, self.daily_limit);
        }

        state.count
    }

    fn warn_threshold(&self) -> u64 {
        self.daily_limit - self.daily_limit / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_within_a_day() {
        let tracker = ApiUsageTracker::new(10_000);
        let today = day(2025, 6, 1);

        assert_eq!(tracker.track_at(today), 1);
        assert_eq!(tracker.track_at(today), 2);
        assert_eq!(tracker.track_at(today), 3);
    }

    #[test]
    fn resets_on_day_rollover() {
        let tracker = ApiUsageTracker::new(10_000);

        assert_eq!(tracker.track_at(day(2025, 6, 1)), 1);
        assert_eq!(tracker.track_at(day(2025, 6, 1)), 2);
        assert_eq!(tracker.track_at(day(2025, 6, 2)), 1);
    }

    #[test]
    fn earlier_date_does_not_reset() {
        // Clock skew backwards must not wipe the running count.
        let tracker = ApiUsageTracker::new(10_000);

        assert_eq!(tracker.track_at(day(2025, 6, 2)), 1);
        assert_eq!(tracker.track_at(day(2025, 6, 1)), 2);
    }

    #[test]
    fn warn_threshold_is_ninety_percent() {
        let tracker = ApiUsageTracker::new(10_000);
        assert_eq!(tracker.warn_threshold(), 9_000);
    }
}
