/// Notification service - finds the birthday topic and publishes reminders
use tracing::info;

use crate::constants::BIRTHDAY_TOPIC_MARKER;
use crate::error::{NotifierError, Result};
use crate::messaging::Messenger;
use crate::models::{NotificationTarget, TopicDescriptor};

/// Pick the first topic whose ARN contains "birthdays"
///
/// When several topics match, the first in listing order wins. SNS does not
/// document a stable listing order, so accounts should hold a single match.
pub fn resolve_target(topics: &[TopicDescriptor]) -> Result<NotificationTarget> {
    topics
        .iter()
        .find(|topic| topic.topic_arn.contains(BIRTHDAY_TOPIC_MARKER))
        .map(|topic| NotificationTarget {
            topic_arn: topic.topic_arn.clone(),
        })
        .ok_or(NotifierError::TargetNotFound)
}

/// Service for dispatching reminders through a messenger
pub struct NotificationService<'a> {
    messenger: &'a dyn Messenger,
}

impl<'a> NotificationService<'a> {
    /// Create a new notification service
    pub fn new(messenger: &'a dyn Messenger) -> Self {
        Self { messenger }
    }

    /// List the available topics and resolve the birthday topic
    pub async fn resolve_target(&self) -> Result<NotificationTarget> {
        let topics = self.messenger.list_topics().await?;
        let target = resolve_target(&topics)?;
        info!("Using birthday topic {}", target.topic_arn);
        Ok(target)
    }

    /// Send a message to the target; failures are returned, never retried
    pub async fn publish(&self, target: &NotificationTarget, message: &str) -> Result<()> {
        self.messenger.publish(&target.topic_arn, message).await?;
        Ok(())
    }
}
