use chrono::NaiveDate;
use std::str::FromStr;

use crate::error::NotifierError;

/// A person whose birthday should be announced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl Contact {
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
        }
    }
}

/// A contact annotated with the dates derived for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthdayRow {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub next_birthday: NaiveDate,
    pub day_before_next_birthday: NaiveDate,
    pub month_before_next_birthday: NaiveDate,
}

impl BirthdayRow {
    /// Read the date stored under a trigger column
    pub fn trigger_date(&self, column: TriggerColumn) -> NaiveDate {
        match column {
            TriggerColumn::DayBeforeNextBirthday => self.day_before_next_birthday,
            TriggerColumn::MonthBeforeNextBirthday => self.month_before_next_birthday,
        }
    }
}

/// Rows in contact order, rebuilt on every run
pub type BirthdayTable = Vec<BirthdayRow>;

/// Derived date columns that decide whether a reminder is due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerColumn {
    DayBeforeNextBirthday,
    MonthBeforeNextBirthday,
}

impl TriggerColumn {
    /// Columns in the order they are checked
    pub const ALL: [TriggerColumn; 2] = [
        TriggerColumn::DayBeforeNextBirthday,
        TriggerColumn::MonthBeforeNextBirthday,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TriggerColumn::DayBeforeNextBirthday => "day_before_next_birthday",
            TriggerColumn::MonthBeforeNextBirthday => "month_before_next_birthday",
        }
    }
}

impl FromStr for TriggerColumn {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriggerColumn::ALL
            .into_iter()
            .find(|column| column.key() == s)
            .ok_or_else(|| NotifierError::InvalidColumnKey(s.to_string()))
    }
}

/// A topic as returned by the messaging service's listing call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDescriptor {
    pub topic_arn: String,
}

impl TopicDescriptor {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
        }
    }
}

/// The topic reminders are published to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationTarget {
    pub topic_arn: String,
}
