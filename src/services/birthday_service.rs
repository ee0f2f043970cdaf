/// Birthday service - contact loading and the per-run birthday table
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::constants::DOB_FORMAT;
use crate::error::{NotifierError, Result};
use crate::models::{BirthdayRow, BirthdayTable, Contact};
use crate::utils::datetime::{day_before, next_birthday, previous_month, validate_birthday};

/// Attributes stored for each name in the contacts file
#[derive(Debug, Deserialize)]
struct ContactEntry {
    dob: String,
}

/// Parse contacts from JSON shaped like `{"Harriet": {"dob": "1993-10-22"}}`
///
/// Contacts keep the key order of the document. Birthdays that can't produce
/// both reminder dates every year are rejected here rather than on a later run.
pub fn parse_contacts(json: &str) -> Result<Vec<Contact>> {
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).map_err(|e| NotifierError::Contacts(e.to_string()))?;

    entries
        .into_iter()
        .map(|(name, value)| {
            let entry: ContactEntry = serde_json::from_value(value)
                .map_err(|e| NotifierError::Contacts(format!("{}: {}", name, e)))?;
            let date_of_birth = NaiveDate::parse_from_str(&entry.dob, DOB_FORMAT).map_err(|_| {
                NotifierError::Contacts(format!(
                    "{}: expected dob in YYYY-MM-DD format, got '{}'",
                    name, entry.dob
                ))
            })?;
            validate_birthday(date_of_birth)
                .map_err(|e| NotifierError::Contacts(format!("{}: {}", name, e)))?;
            Ok(Contact::new(name, date_of_birth))
        })
        .collect()
}

/// Read and parse the contacts file
pub fn load_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| NotifierError::Contacts(format!("{}: {}", path.display(), e)))?;
    parse_contacts(&json)
}

/// Derive the trigger dates for one contact
pub fn build_birthday_row(contact: &Contact, today: NaiveDate) -> Result<BirthdayRow> {
    let next = next_birthday(contact.date_of_birth, today)?;

    Ok(BirthdayRow {
        name: contact.name.clone(),
        date_of_birth: contact.date_of_birth,
        next_birthday: next,
        day_before_next_birthday: day_before(next)?,
        month_before_next_birthday: previous_month(next)?,
    })
}

/// Build a row per contact, in contact order
pub fn build_birthday_table(contacts: &[Contact], today: NaiveDate) -> Result<BirthdayTable> {
    contacts
        .iter()
        .map(|contact| build_birthday_row(contact, today))
        .collect()
}
