use chrono_tz::Tz;

/// Daily schedule for in-process runs
#[derive(Debug, Clone)]
pub struct Schedule {
    pub cron_expression: String, // Cron expression (e.g., "0 0 8 * * *" for 8 AM daily)
    pub timezone: Tz,            // Zone the cron expression and "today" are evaluated in
}
