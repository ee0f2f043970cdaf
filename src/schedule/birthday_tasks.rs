use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::Result;
use crate::messaging::Messenger;
use crate::models::{Contact, TriggerColumn};
use crate::services::birthday_service::build_birthday_table;
use crate::services::notification_service::NotificationService;
use crate::utils::message_formatter::{build_reminder_message, build_skip_message, phrase_for};

/// Send reminders for birthdays falling tomorrow or in a month
///
/// Messages go out in table order, all "tomorrow" reminders before any "in a
/// month" reminder. The first publish failure aborts the rest of the run.
pub async fn run_birthday_check(
    messenger: &dyn Messenger,
    contacts: &[Contact],
    today: NaiveDate,
) -> Result<()> {
    info!("Checking {} birthday(s) against {}", contacts.len(), today);

    let service = NotificationService::new(messenger);
    let target = service.resolve_target().await?;

    let table = build_birthday_table(contacts, today)?;
    for row in &table {
        debug!("Next birthday for {} is {}", row.name, row.next_birthday);
    }

    for column in TriggerColumn::ALL {
        let phrase = phrase_for(column.key())?;

        for row in &table {
            if row.trigger_date(column) == today {
                let message = build_reminder_message(&row.name, row.date_of_birth, phrase);
                info!("Sending message: {}", message);
                service.publish(&target, &message).await?;
            } else {
                info!("{}", build_skip_message(column, &row.name));
            }
        }
    }

    info!("Birthday check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifierError;
    use crate::messaging::mock::MockMessenger;

    const TOPIC: &str = "arn:aws:sns:eu-west-1:123456789012:birthdays";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn messages(published: Vec<(String, String)>) -> Vec<String> {
        published
            .into_iter()
            .map(|(arn, message)| {
                assert_eq!(arn, TOPIC);
                message
            })
            .collect()
    }

    #[tokio::test]
    async fn test_no_birthdays_due() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        let contacts = vec![
            Contact::new("Harriet", date(1993, 10, 22)),
            Contact::new("Jane", date(1995, 5, 13)),
        ];

        run_birthday_check(&messenger, &contacts, date(2021, 12, 28)).await.unwrap();

        assert!(messenger.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_birthday_tomorrow() {
        let messenger = MockMessenger::with_topics(&["arn:aws:sns:eu-west-1:1:nada", TOPIC]);
        let contacts = vec![Contact::new("Harriet", date(1993, 10, 22))];

        run_birthday_check(&messenger, &contacts, date(2022, 10, 21)).await.unwrap();

        assert_eq!(
            messages(messenger.published().await),
            vec!["It is Harriet's Birthday tomorrow!, Their birthday is 1993-10-22."]
        );
    }

    #[tokio::test]
    async fn test_birthday_in_a_month() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        let contacts = vec![Contact::new("Jane", date(1995, 5, 13))];

        run_birthday_check(&messenger, &contacts, date(2022, 4, 13)).await.unwrap();

        assert_eq!(
            messages(messenger.published().await),
            vec!["It is Jane's Birthday in a month!, Their birthday is 1995-05-13."]
        );
    }

    #[tokio::test]
    async fn test_columns_dispatched_before_rows() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        let contacts = vec![
            Contact::new("Month", date(1990, 7, 20)),
            Contact::new("Day", date(1991, 6, 21)),
            Contact::new("Other", date(1992, 1, 2)),
        ];

        run_birthday_check(&messenger, &contacts, date(2022, 6, 20)).await.unwrap();

        assert_eq!(
            messages(messenger.published().await),
            vec![
                "It is Day's Birthday tomorrow!, Their birthday is 1991-06-21.",
                "It is Month's Birthday in a month!, Their birthday is 1990-07-20.",
            ]
        );
    }

    #[tokio::test]
    async fn test_birthday_today_is_not_announced() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        let contacts = vec![Contact::new("Harriet", date(1993, 10, 22))];

        run_birthday_check(&messenger, &contacts, date(2022, 10, 22)).await.unwrap();

        assert!(messenger.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_sends_again() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        let contacts = vec![Contact::new("Harriet", date(1993, 10, 22))];
        let today = date(2022, 10, 21);

        run_birthday_check(&messenger, &contacts, today).await.unwrap();
        run_birthday_check(&messenger, &contacts, today).await.unwrap();

        assert_eq!(messenger.published().await.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_topic_sends_nothing() {
        let messenger = MockMessenger::with_topics(&["arn:aws:sns:eu-west-1:1:nada"]);
        let contacts = vec![Contact::new("Harriet", date(1993, 10, 22))];

        let result = run_birthday_check(&messenger, &contacts, date(2022, 10, 21)).await;

        assert!(matches!(result, Err(NotifierError::TargetNotFound)));
        assert!(messenger.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_aborts_remaining() {
        let messenger = MockMessenger::with_topics(&[TOPIC]);
        messenger.set_fail_after(1).await;
        let contacts = vec![
            Contact::new("Ann", date(1990, 6, 21)),
            Contact::new("Bob", date(1991, 6, 21)),
            Contact::new("Cat", date(1992, 6, 21)),
        ];

        let result = run_birthday_check(&messenger, &contacts, date(2022, 6, 20)).await;

        assert!(matches!(result, Err(NotifierError::Messaging(_))));
        assert_eq!(
            messages(messenger.published().await),
            vec!["It is Ann's Birthday tomorrow!, Their birthday is 1990-06-21."]
        );
    }
}
