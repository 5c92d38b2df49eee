//! Formats today's date and writes it into the display target.

use tracing::{debug, warn};

use crate::prelude::*;
use crate::{CalendarDate, Clock, DisplaySink, SinkError, StamperConfig, SystemClock};

/// A date rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into)]
pub struct FormattedDate(String);

impl FormattedDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FormattedDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for stamping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StampError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Formats a date as `DD.MM.YYYY`: day and month zero-padded to two digits,
/// year as its full value.
pub fn format_date(date: &CalendarDate) -> FormattedDate {
    FormattedDate(date.to_string())
}

/// Reads the date from a [`Clock`] and writes it into the configured target.
#[derive(Debug, Clone)]
pub struct DateStamper<C> {
    clock:  C,
    config: StamperConfig,
}

impl<C: Clock> DateStamper<C> {
    pub const fn new(clock: C, config: StamperConfig) -> Self {
        Self { clock, config }
    }

    /// Stamper writing into the default target
    pub fn with_clock(clock: C) -> Self {
        Self::new(clock, StamperConfig::default())
    }

    pub const fn config(&self) -> &StamperConfig {
        &self.config
    }

    /// Reads the clock once and formats the result.
    pub fn render(&self) -> FormattedDate {
        format_date(&self.clock.today())
    }

    /// Writes today's date into the target, reporting a missing target.
    ///
    /// # Errors
    /// Returns `StampError::Sink` if the sink has no element with the configured id.
    pub fn try_stamp<S>(&self, sink: &mut S) -> Result<FormattedDate, StampError>
    where
        S: DisplaySink + ?Sized,
    {
        let formatted = self.render();
        sink.set_text(self.config.target(), &formatted)?;
        debug!(element = self.config.target(), date = %formatted, "stamped current date");
        Ok(formatted)
    }

    /// Writes today's date into the target.
    ///
    /// A missing target is logged and otherwise ignored; nothing is written
    /// and `None` is returned.
    pub fn stamp<S>(&self, sink: &mut S) -> Option<FormattedDate>
    where
        S: DisplaySink + ?Sized,
    {
        match self.try_stamp(sink) {
            Ok(formatted) => Some(formatted),
            Err(err) => {
                warn!(error = %err, "skipping date stamp");
                None
            },
        }
    }
}

impl Default for DateStamper<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}
