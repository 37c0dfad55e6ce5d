//! Publish validation boundary - length checks before the platform client

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{PlatformClient, PlatformError};
use crate::usecases::compose::MAX_POST_CHARS;

/// Error type for publish attempts
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("message too long: {len} > {max}")]
    MessageTooLong { len: usize, max: usize },
    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),
}

/// Validation boundary in front of the platform client's post creation
///
/// Rejects empty and over-length messages without calling the platform;
/// never truncates on the caller's behalf. All failures come back as typed
/// results so a failed post cannot crash the pipeline.
pub struct Publisher<C>
where
    C: PlatformClient + ?Sized,
{
    client: Arc<C>,
}

impl<C> Publisher<C>
where
    C: PlatformClient + ?Sized,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Validate and publish, returning the platform-assigned post ID
    pub async fn publish(&self, text: &str) -> Result<String, PublishError> {
        if text.is_empty() {
            return Err(PublishError::EmptyMessage);
        }

        let len = text.chars().count();
        if len > MAX_POST_CHARS {
            return Err(PublishError::MessageTooLong {
                len,
                max: MAX_POST_CHARS,
            });
        }

        let created = self.client.create_post(text).await?;

        tracing::info!(post_id = %created.id, chars = len, "Published post");

        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CreatedPost, PostsPage, UserRecord};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeClient {
        created: Mutex<Vec<String>>,
        fail_with: Option<fn() -> PlatformError>,
    }

    impl FakeClient {
        fn new() -> Self {
            Self {
                created: Mutex::new(vec![]),
                fail_with: None,
            }
        }

        fn failing(fail_with: fn() -> PlatformError) -> Self {
            Self {
                created: Mutex::new(vec![]),
                fail_with: Some(fail_with),
            }
        }
    }

    #[async_trait]
    impl PlatformClient for FakeClient {
        async fn create_post(&self, text: &str) -> Result<CreatedPost, PlatformError> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            self.created.lock().unwrap().push(text.to_string());
            Ok(CreatedPost {
                id: "post_1".to_string(),
            })
        }

        async fn get_user(&self, _handle: &str) -> Result<Option<UserRecord>, PlatformError> {
            unimplemented!("not used by publish tests")
        }

        async fn get_user_posts(
            &self,
            _user_id: &str,
            _max: u32,
        ) -> Result<PostsPage, PlatformError> {
            unimplemented!("not used by publish tests")
        }
    }

    #[tokio::test]
    async fn empty_message_is_rejected_without_calling_client() {
        let client = Arc::new(FakeClient::new());
        let publisher = Publisher::new(Arc::clone(&client));

        let result = publisher.publish("").await;

        assert!(matches!(result, Err(PublishError::EmptyMessage)));
        assert!(client.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn message_of_281_chars_is_rejected() {
        let client = Arc::new(FakeClient::new());
        let publisher = Publisher::new(Arc::clone(&client));

        let result = publisher.publish(&"a".repeat(281)).await;

        assert!(matches!(
            result,
            Err(PublishError::MessageTooLong { len: 281, max: 280 })
        ));
        assert!(client.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn message_of_280_chars_delegates_to_client() {
        let client = Arc::new(FakeClient::new());
        let publisher = Publisher::new(Arc::clone(&client));

        let id = publisher.publish(&"a".repeat(280)).await.unwrap();

        assert_eq!(id, "post_1");
        assert_eq!(client.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn length_is_counted_in_chars_not_bytes() {
        let client = Arc::new(FakeClient::new());
        let publisher = Publisher::new(Arc::clone(&client));

        // 280 two-byte chars: 560 bytes but within the character limit
        let result = publisher.publish(&"é".repeat(280)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn client_failure_surfaces_as_platform_error() {
        let client = Arc::new(FakeClient::failing(|| {
            PlatformError::Api("boom".to_string())
        }));
        let publisher = Publisher::new(client);

        let result = publisher.publish("hello").await;

        assert!(matches!(result, Err(PublishError::Platform(_))));
    }
}
