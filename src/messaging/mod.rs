//! Messaging collaborator used to discover topics and publish reminders.
//!
//! - `Messenger` trait: topic listing and publishing
//! - Implementations: AWS SNS, Mock

use async_trait::async_trait;
use thiserror::Error;

use crate::models::TopicDescriptor;

#[cfg(test)]
pub mod mock;
pub mod sns;

pub use sns::{SnsConfig, SnsMessenger};

/// Result type for messaging operations.
pub type Result<T> = std::result::Result<T, MessagingError>;

/// Errors returned by the messaging service.
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Listing topics failed: {0}")]
    ListTopics(String),

    #[error("Publish failed: {0}")]
    Publish(String),
}

/// Publish/subscribe service holding the birthday topic.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// List every topic visible to the caller, in the service's order.
    async fn list_topics(&self) -> Result<Vec<TopicDescriptor>>;

    /// Publish a plain-text message to a topic. Delivery guarantees are the service's.
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<()>;
}
