use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

use super::Schedule;
use super::birthday_tasks::run_birthday_check;
use crate::messaging::Messenger;
use crate::models::Contact;
use crate::utils::timezone::today_in;

/// Run the birthday check every day at the scheduled time, forever
///
/// A failed run is logged and the next day's run still happens.
pub async fn run_schedule_manager(
    messenger: &dyn Messenger,
    contacts: &[Contact],
    schedule: Schedule,
) {
    info!(
        "Schedule manager started (cron: '{}', timezone: {})",
        schedule.cron_expression, schedule.timezone
    );

    loop {
        let Some(wait_duration) = time_until_next_run(&schedule, Utc::now()) else {
            error!("No upcoming run for cron '{}', stopping", schedule.cron_expression);
            break;
        };

        info!("Next birthday check will run in {} minutes", wait_duration.as_secs() / 60);
        sleep(wait_duration).await;

        run_scheduled_check(messenger, contacts, today_in(&schedule.timezone)).await;
    }

    info!("Schedule manager stopped");
}

/// One scheduled run, returning whether it succeeded; failures are only logged
async fn run_scheduled_check(messenger: &dyn Messenger, contacts: &[Contact], today: NaiveDate) -> bool {
    match run_birthday_check(messenger, contacts, today).await {
        Ok(()) => true,
        Err(e) => {
            error!("Birthday check for {} failed: {}", today, e);
            false
        }
    }
}

/// Time from `now` until the next occurrence of the schedule
fn time_until_next_run(schedule: &Schedule, now: DateTime<Utc>) -> Option<Duration> {
    let cron_schedule = cron::Schedule::from_str(&schedule.cron_expression)
        .map_err(|e| {
            error!("Invalid cron expression '{}': {}", schedule.cron_expression, e);
            e
        })
        .ok()?;

    let now_local = now.with_timezone(&schedule.timezone);
    let next_time = cron_schedule.after(&now_local).next().or_else(|| {
        warn!("No upcoming time found for cron '{}'", schedule.cron_expression);
        None
    })?;

    Some(
        (next_time.with_timezone(&Utc) - now)
            .to_std()
            .unwrap_or(Duration::from_secs(60)),
    )
}
