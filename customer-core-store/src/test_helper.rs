//! Fixtures shared by the store's tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use customer_core_api::service::clock::Clock;
use parking_lot::Mutex;

/// Start of every `ManualClock`: mid-month, so a handful of ticks never
/// crosses into another month.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 10, 0, 0).unwrap()
}

pub fn test_clock_step() -> TimeDelta {
    TimeDelta::seconds(1)
}

/// Clock that starts at `test_now()` and moves forward one step per reading,
/// so consecutive mutations get distinct, predictable timestamps.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(test_now())
    }
}

impl ManualClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            step: test_clock_step(),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock();
        let reading = *now;
        *now = reading + self.step;
        reading
    }
}
