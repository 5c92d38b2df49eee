mod clock;
mod config;
mod consts;
mod prelude;
mod sink;
mod stamper;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, StamperConfig};
pub use consts::*;
pub use sink::{DisplaySink, Document, SinkError};
pub use stamper::{DateStamper, FormattedDate, StampError, format_date};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A concrete calendar date (local day, month and year).
/// Displays in the stamped `DD.MM.YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}.{:02}.{}", "day.get()", "month.get()", "year.get()")]
pub struct CalendarDate {
    // Field order drives the derived ordering: year, then month, then day
    year:  types::Year,
    month: types::Month,
    day:   types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from typed components, checking the day against the month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month of that year.
    pub fn new(
        year: types::Year,
        month: types::Month,
        day: types::Day,
    ) -> Result<Self, ParseError> {
        // A standalone Day only knows 1..=31
        let day = types::Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers, validating month and day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` for out-of-range components.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = types::Year::new(year);
        let month = types::Month::new(month)?;
        let day = types::Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the day-of-month (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month, 1-12 (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    pub const fn year_typed(&self) -> types::Year {
        self.year
    }
}

impl From<chrono::NaiveDate> for CalendarDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        // chrono hands out month 1-12 and a day valid for that month
        Self {
            year:  types::Year::new(date.year()),
            month: types::Month::from_calendar(date.month() as u8),
            day:   types::Day::from_calendar(date.day() as u8),
        }
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(STAMP_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [day, month, year] => {
                // Parse components - InvalidFormat if not numeric
                let day = Self::parse_number::<u8>(day)?;
                let month = Self::parse_number::<u8>(month)?;
                let year = Self::parse_number::<i32>(year)?;

                Self::from_ymd(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected 2 {STAMP_SEPARATOR} separators, found {}",
                parts.len() - 1
            ))),
        }
    }
}

impl CalendarDate {
    /// Helper to parse a numeric component with a useful error message
    fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
