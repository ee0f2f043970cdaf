//! Mock messenger implementation for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MessagingError, Messenger, Result};
use crate::models::TopicDescriptor;

/// In-memory messenger recording every published message.
#[derive(Default)]
pub struct MockMessenger {
    topics: Vec<TopicDescriptor>,
    published: RwLock<Vec<(String, String)>>,
    fail_after: RwLock<Option<usize>>,
}

impl MockMessenger {
    pub fn with_topics(arns: &[&str]) -> Self {
        Self {
            topics: arns.iter().map(|arn| TopicDescriptor::new(*arn)).collect(),
            ..Self::default()
        }
    }

    /// Fail every publish once `count` messages have been accepted.
    pub async fn set_fail_after(&self, count: usize) {
        *self.fail_after.write().await = Some(count);
    }

    pub async fn published(&self) -> Vec<(String, String)> {
        self.published.read().await.clone()
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn list_topics(&self) -> Result<Vec<TopicDescriptor>> {
        Ok(self.topics.clone())
    }

    async fn publish(&self, topic_arn: &str, message: &str) -> Result<()> {
        let mut published = self.published.write().await;
        if let Some(limit) = *self.fail_after.read().await {
            if published.len() >= limit {
                return Err(MessagingError::Publish("Mock publish failure".to_string()));
            }
        }
        published.push((topic_arn.to_string(), message.to_string()));
        Ok(())
    }
}
