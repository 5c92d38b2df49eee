//! Sources of the current calendar date.

use chrono::Local;

use crate::CalendarDate;

/// Port for reading today's date.
///
/// Production code reads the host clock; tests pin a date with [`FixedClock`].
pub trait Clock {
    /// Returns the current local calendar date.
    fn today(&self) -> CalendarDate;
}

/// Reads the host's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub const fn new(date: CalendarDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
