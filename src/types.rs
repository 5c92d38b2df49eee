use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A calendar year as reported by the host clock.
/// Any value is accepted; it is rendered without padding or truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month already range-checked by the host calendar
    pub(crate) const fn from_calendar(value: u8) -> Self {
        debug_assert!(value != 0);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or too large for the given year and month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            day:   value,
            month: month.get(),
            year:  year.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Wraps a day already range-checked by the host calendar
    pub(crate) const fn from_calendar(value: u8) -> Self {
        debug_assert!(value != 0);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the month-independent bounds can be checked
        let max_any_month = DAYS_IN_MONTH.iter().copied().max().unwrap_or(MIN_DAY);
        if value < MIN_DAY || value > max_any_month {
            return Err(ParseError::InvalidDay {
                day:   value,
                month: 0,
                year:  0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            day:   value,
            month: 0,
            year:  0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
