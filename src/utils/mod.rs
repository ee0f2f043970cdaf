/// Utility modules for common functionality
pub mod datetime;
pub mod message_formatter;
pub mod timezone;
