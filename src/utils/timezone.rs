use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Error types for timezone operations
#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),
}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str.parse().map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Parse a time string in HH:MM format
pub fn parse_time_string(time_str: &str) -> Result<NaiveTime, TimezoneError> {
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|_| TimezoneError::InvalidTime(format!("Expected HH:MM format, got '{}'", time_str)))
}

/// Calendar date of an instant as seen in a timezone
pub fn date_in_timezone(instant: DateTime<Utc>, timezone: &Tz) -> NaiveDate {
    instant.with_timezone(timezone).date_naive()
}

/// Today's date in a timezone; the only clock read in the crate
pub fn today_in(timezone: &Tz) -> NaiveDate {
    date_in_timezone(Utc::now(), timezone)
}

/// Create a daily cron expression firing at a wall-clock time
pub fn create_cron_expression(time: NaiveTime) -> String {
    format!("0 {} {} * * *", time.minute(), time.hour())
}

/// Convert an HH:MM string to a daily cron expression
pub fn time_to_cron(time_str: &str) -> Result<String, TimezoneError> {
    let parsed_time = parse_time_string(time_str)?;
    Ok(create_cron_expression(parsed_time))
}
