use thiserror::Error;

use crate::messaging::MessagingError;

/// Result type for notifier operations.
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Errors that can abort a notifier run.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("{0} is not a valid argument for value")]
    InvalidColumnKey(String),

    #[error("No SNS topic containing 'birthdays' was found")]
    TargetNotFound,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid contacts: {0}")]
    Contacts(String),

    #[error(transparent)]
    Messaging(#[from] MessagingError),
}
