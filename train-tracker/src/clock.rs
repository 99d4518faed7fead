//! Wall-clock source for fetchers.
//!
//! Fetchers never read the system clock directly. They take a `Clock` and
//! convert its instant into the carrier's own time zone, so tests can pin
//! "now" to a known date.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// A source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current instant as local time in `tz`.
    fn now_in(&self, tz: Tz) -> NaiveDateTime {
        self.now().with_timezone(&tz).naive_local()
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
