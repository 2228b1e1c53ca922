use crate::error::ChangelogError;
use crate::types::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format used for sections reconstructed from published releases
pub const BACKFILL_DISPLAY_FORMAT: &str = "%a, %b %-d, %Y, %H:%M:%S GMT";

const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

// Offset-carrying formats besides RFC 3339 / RFC 2822. The first is git's default.
const ZONED_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %Y %z", "%a %b %d %Y %H:%M:%S %z"];

// Formats without an offset are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%a, %b %d, %Y, %H:%M:%S GMT",
    "%a %b %d %Y %H:%M:%S",
    "%a %b %d %H:%M:%S %Y",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%a %b %d %Y", "%a, %b %d, %Y", "%Y-%m-%d"];

/// When a release was built: the text shown in its section header together
/// with the instant it denotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDate {
    display: String,
    timestamp: DateTime<Utc>,
}

impl ReleaseDate {
    /// Parses a user supplied date, keeping the input verbatim for display
    ///
    /// # Errors
    /// Returns a validation error when none of the known date formats match
    pub fn parse(display: &str) -> Result<Self> {
        let trimmed = display.trim();
        let timestamp = parse_timestamp(trimmed)
            .ok_or_else(|| ChangelogError::validation(format!("Invalid date: '{display}'")))?;

        Ok(Self {
            display: trimmed.to_string(),
            timestamp,
        })
    }

    /// Builds the date of a backfilled release from its commit timestamp
    #[must_use]
    pub fn from_utc(timestamp: DateTime<Utc>) -> Self {
        Self {
            display: timestamp.format(BACKFILL_DISPLAY_FORMAT).to_string(),
            timestamp,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 form with millisecond precision, used as the section id
    #[must_use]
    pub fn stamp(&self) -> String {
        self.timestamp.format(STAMP_FORMAT).to_string()
    }
}

fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }

    ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}
