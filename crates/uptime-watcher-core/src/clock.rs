//! Wall-clock abstraction.
//!
//! The engine reads time only through [`Clock`], so tests can pin both the
//! instant and the UTC offset used for calendar-day comparisons.

use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    /// Current instant, in the offset used for "today" comparisons.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current instant as whole seconds since the epoch.
    fn timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Settable clock for deterministic tests and simulations.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock at `timestamp` seconds since epoch, in UTC.
    pub fn at_timestamp(timestamp: i64) -> Self {
        let now = Utc
            .timestamp_opt(timestamp, 0)
            .single()
            .unwrap_or_default()
            .fixed_offset();
        Self::new(now)
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.lock();
        *guard += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<FixedOffset>> {
        // A poisoned clock still holds a valid instant.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.lock()
    }
}
