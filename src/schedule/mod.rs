/// Schedule management modules
mod birthday_tasks;
mod manager;
mod types;

// Re-export public types and functions
pub use birthday_tasks::run_birthday_check;
pub use manager::run_schedule_manager;
pub use types::Schedule;
