//! Stub platform client for dry runs and tests

use async_trait::async_trait;
use news_herald_domain::{
    CreatedPost, PlatformClient, PlatformError, PostsPage, UserRecord,
};

/// Platform client that performs no I/O
///
/// Backs `--dry-run`: post creation is logged and acknowledged with a
/// fixed ID, user lookups resolve to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPlatformClient;

#[async_trait]
impl PlatformClient for StubPlatformClient {
    async fn create_post(&self, text: &str) -> Result<CreatedPost, PlatformError> {
        tracing::info!(text = %text, "[DRY RUN] Would create post");
        Ok(CreatedPost {
            id: "dry-run".to_string(),
        })
    }

    async fn get_user(&self, handle: &str) -> Result<Option<UserRecord>, PlatformError> {
        tracing::info!(handle = %handle, "[DRY RUN] User lookup resolves to nothing");
        Ok(None)
    }

    async fn get_user_posts(
        &self,
        _user_id: &str,
        _max: u32,
    ) -> Result<PostsPage, PlatformError> {
        Ok(PostsPage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_acknowledges_posts_without_network() {
        let client = StubPlatformClient;

        let created = client.create_post("hello").await.unwrap();

        assert_eq!(created.id, "dry-run");
        assert!(client.get_user("anyone").await.unwrap().is_none());
    }
}
