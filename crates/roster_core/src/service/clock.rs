//! Time source used by registration use-cases.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

/// Supplies "now" for timestamps and "today" for age checks.
pub trait Clock {
    /// Current UTC timestamp.
    fn now(&self) -> NaiveDateTime;
    /// Current calendar date where the registrant is.
    fn today(&self) -> NaiveDate;
}

/// Wall clock: UTC timestamps, local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }
}
