/// Pure date utility functions (no clock reads)
use chrono::{Datelike, Days, NaiveDate};

use crate::error::{NotifierError, Result};

/// Any non-leap year
const COMMON_YEAR: i32 = 2023;

/// Build a date, reporting dates that don't exist (e.g. 29 February in a common year)
pub fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        NotifierError::InvalidDate(format!("{:04}-{:02}-{:02} does not exist", year, month, day))
    })
}

/// Next occurrence of a birthday on or after `today`
///
/// A birthday earlier in the year than today rolls over to next year. A birthday
/// falling on today itself stays in the current year.
pub fn next_birthday(date_of_birth: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    let birthday = (date_of_birth.month(), date_of_birth.day());
    let current = (today.month(), today.day());

    let year = if birthday < current {
        today.year() + 1
    } else {
        today.year()
    };

    checked_date(year, date_of_birth.month(), date_of_birth.day())
}

/// The day before a date
pub fn day_before(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(1))
        .ok_or_else(|| NotifierError::InvalidDate(format!("no day before {}", date)))
}

/// Same day-of-month in the previous calendar month
///
/// January rolls back to December of the previous year. Days that don't exist in
/// the previous month are an error rather than being clamped.
pub fn previous_month(date: NaiveDate) -> Result<NaiveDate> {
    if date.month() == 1 {
        checked_date(date.year() - 1, 12, date.day())
    } else {
        checked_date(date.year(), date.month() - 1, date.day())
    }
}

/// Check that a birthday yields valid trigger dates in every year
///
/// A date and the same day a month earlier that both exist in a common year
/// exist in every year. This rejects 29 February and days such as 31 May whose
/// previous month is shorter.
pub fn validate_birthday(date_of_birth: NaiveDate) -> Result<()> {
    let (month, day) = (date_of_birth.month(), date_of_birth.day());
    let occurrence = checked_date(COMMON_YEAR, month, day).map_err(|_| {
        NotifierError::InvalidDate(format!("{:02}-{:02} does not occur every year", month, day))
    })?;
    previous_month(occurrence).map_err(|_| {
        NotifierError::InvalidDate(format!(
            "{:02}-{:02} has no matching day one month earlier",
            month, day
        ))
    })?;
    Ok(())
}
