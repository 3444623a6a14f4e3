//! Timestamp rendering for history views.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate};

use crate::types::ValidationError;

/// Day-first calendar date, e.g. `02/06/2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// 24-hour time of day, e.g. `14:30`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Validated date and time patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    date: String,
    time: String,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TimestampFormat {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();
        let time = time.into();
        validate("date format", &date)?;
        validate("time format", &time)?;
        Ok(Self { date, time })
    }

    pub fn date(&self, timestamp: &DateTime<Local>) -> String {
        timestamp.format(&self.date).to_string()
    }

    pub fn time(&self, timestamp: &DateTime<Local>) -> String {
        timestamp.format(&self.time).to_string()
    }

    /// Renders a bare calendar date with the date pattern.
    ///
    /// Falls back to ISO 8601 when the pattern asks for fields a date does not
    /// have, such as an hour or an offset.
    pub fn day(&self, date: NaiveDate) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", date.format(&self.date)).is_err() {
            return date.to_string();
        }
        rendered
    }
}

// `DelayedFormat` panics in `to_string` on malformed patterns, so reject them up front.
fn validate(field: &'static str, pattern: &str) -> Result<(), ValidationError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::InvalidFormat {
            field,
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}
