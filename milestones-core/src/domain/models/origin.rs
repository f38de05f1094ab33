//! Domain model for the instant milestones are measured from.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A labelled local wall-clock instant (birth or a custom event)
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Provenance label copied into `Milestone::source_event_name`
    pub label: String,
    /// Prefix for milestone IDs; equals `label` unless the label is already taken
    pub id_prefix: String,
    pub start: NaiveDateTime,
}

impl Origin {
    pub fn new(label: &str, start: NaiveDateTime) -> Self {
        Self {
            label: label.to_string(),
            id_prefix: label.to_string(),
            start,
        }
    }

    /// Build an origin from the raw date and time strings supplied by the UI.
    ///
    /// A missing or unparseable date is an error; a malformed time of day is not,
    /// it falls back to midnight.
    pub fn from_parts(
        label: &str,
        date: Option<&str>,
        time_of_day: Option<&str>,
    ) -> Result<Self, OriginError> {
        let date = match date {
            Some(raw) if !raw.trim().is_empty() => parse_origin_date(raw)?,
            _ => return Err(OriginError::MissingDate),
        };
        let time = time_of_day_or_midnight(time_of_day);
        Ok(Self::new(label, date.and_time(time)))
    }

    pub fn with_id_prefix(mut self, id_prefix: String) -> Self {
        self.id_prefix = id_prefix;
        self
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OriginError {
    #[error("Origin date is missing")]
    MissingDate,
    #[error("Invalid origin date: {0}")]
    InvalidDate(String),
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

/// Parse "YYYY-MM-DD", or the date part of an RFC 3339 timestamp
pub fn parse_origin_date(input: &str) -> Result<NaiveDate, OriginError> {
    let date_part = input.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| OriginError::InvalidDate(input.to_string()))
}

/// Parse "HH:MM" (or a bare hour, "HH") into a time of day.
///
/// A trailing seconds part ("HH:MM:SS") is accepted and ignored.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, OriginError> {
    let invalid = || OriginError::InvalidTime(input.to_string());
    let mut parts = input.trim().split(':');

    let hour = parts
        .next()
        .and_then(|h| h.trim().parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let minute = match parts.next() {
        Some(m) => m.trim().parse::<u32>().map_err(|_| invalid())?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Time of day for an origin; absent or malformed input means midnight
pub fn time_of_day_or_midnight(input: Option<&str>) -> NaiveTime {
    match input {
        Some(raw) if !raw.trim().is_empty() => parse_time_of_day(raw).unwrap_or_else(|e| {
            log::warn!("{}, using midnight", e);
            NaiveTime::default()
        }),
        _ => NaiveTime::default(),
    }
}
