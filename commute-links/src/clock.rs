//! Wall-clock access.
//!
//! Link generation is pure; the current time is read through [`Clock`] so
//! that handlers and tests can substitute a frozen reading.

use chrono::{FixedOffset, Local, NaiveDateTime, Utc};

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    /// The current wall-clock time in the commuter's time zone.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Current time at a fixed UTC offset, for hosts not running in the
/// commuter's time zone.
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock {
    offset: FixedOffset,
}

impl OffsetClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for OffsetClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
