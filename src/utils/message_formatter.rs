/// Pure functions for reminder message formatting
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::TriggerColumn;

/// Human-readable phrase for a trigger column key
pub fn phrase_for(column_key: &str) -> Result<&'static str> {
    let column: TriggerColumn = column_key.parse()?;
    Ok(match column {
        TriggerColumn::DayBeforeNextBirthday => "tomorrow",
        TriggerColumn::MonthBeforeNextBirthday => "in a month",
    })
}

/// Build the reminder text published to the topic
pub fn build_reminder_message(name: &str, date_of_birth: NaiveDate, phrase: &str) -> String {
    format!(
        "It is {}'s Birthday {}!, Their birthday is {}.",
        name,
        phrase,
        date_of_birth.format("%Y-%m-%d")
    )
}

/// Build the log line for a row that isn't due
pub fn build_skip_message(column: TriggerColumn, name: &str) -> String {
    format!(
        "No message sent relating to {} for {}",
        column.key().replace('_', " "),
        name
    )
}
