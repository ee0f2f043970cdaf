//! AWS SNS messenger.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::operation::list_topics::ListTopicsOutput;
use tracing::{debug, info};

use super::{MessagingError, Messenger, Result};
use crate::constants::DEFAULT_REGION;
use crate::models::TopicDescriptor;

/// Configuration for the AWS SNS connection.
#[derive(Clone, Debug)]
pub struct SnsConfig {
    /// AWS region (e.g., "eu-west-1").
    pub region: String,
    /// Custom endpoint URL (for LocalStack or testing).
    pub endpoint_url: Option<String>,
}

impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
        }
    }
}

impl SnsConfig {
    /// Set AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set custom endpoint URL (for LocalStack or testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

/// Messenger backed by AWS SNS.
pub struct SnsMessenger {
    sns: SnsClient,
}

impl SnsMessenger {
    /// Create a new SNS messenger from the default AWS provider chain.
    pub async fn new(config: &SnsConfig) -> Self {
        let mut aws_config_builder = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref endpoint) = config.endpoint_url {
            aws_config_builder = aws_config_builder.endpoint_url(endpoint);
        }

        let aws_config = aws_config_builder.load().await;

        info!(
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "Connected to AWS SNS"
        );

        Self {
            sns: SnsClient::new(&aws_config),
        }
    }
}

#[async_trait]
impl Messenger for SnsMessenger {
    async fn list_topics(&self) -> Result<Vec<TopicDescriptor>> {
        let topics = collect_topic_pages(|next_token| async move {
            self.sns
                .list_topics()
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| {
                    MessagingError::ListTopics(format!("Failed to list SNS topics: {}", error_detail(&e)))
                })
        })
        .await?;

        debug!(count = topics.len(), "Listed SNS topics");
        Ok(topics)
    }

    async fn publish(&self, topic_arn: &str, message: &str) -> Result<()> {
        let output = self
            .sns
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await
            .map_err(|e| MessagingError::Publish(format!("Failed to publish to SNS: {}", error_detail(&e))))?;

        debug!(
            topic_arn = %topic_arn,
            message_id = ?output.message_id(),
            "Published message to SNS"
        );
        Ok(())
    }
}

/// Follow `ListTopics` pages until the service stops returning a token
async fn collect_topic_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<TopicDescriptor>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListTopicsOutput>>,
{
    let mut topics = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let output = fetch_page(next_token.take()).await?;

        topics.extend(
            output
                .topics()
                .iter()
                .filter_map(|topic| topic.topic_arn())
                .map(TopicDescriptor::new),
        );

        match output.next_token() {
            Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
            _ => break,
        }
    }

    Ok(topics)
}

/// SDK errors only name their kind in `Display`; include the source chain
fn error_detail<E: std::error::Error>(e: &E) -> String {
    DisplayErrorContext(e).to_string()
}
