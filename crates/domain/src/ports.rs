//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external
//! systems. Adapters implement these traits to connect to real
//! infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::model::{Article, MediaItem};

/// Port for fetching candidate articles from syndication feeds
///
/// Fetching never fails as a whole: a malformed feed or a network error on
/// one locator is logged by the adapter and that locator's entries are
/// omitted, continuing with the rest.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch articles from the given feed URLs, in feed order
    async fn fetch(&self, feed_urls: &[String]) -> Vec<Article>;
}

/// Error type for platform client operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// A post created on the platform
#[derive(Debug, Clone)]
pub struct CreatedPost {
    /// Platform-assigned post ID
    pub id: String,
}

/// Raw user metadata as returned by the platform
///
/// Field presence mirrors the wire response; defaults are applied when the
/// domain assembles a `UserProfile`, not here.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub created_at: Option<OffsetDateTime>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
    pub url: Option<String>,
    pub verified: Option<bool>,
    pub followers_count: Option<u64>,
    pub following_count: Option<u64>,
    pub post_count: Option<u64>,
    pub listed_count: Option<u64>,
}

/// Raw post data as returned by the platform
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: String,
    pub text: String,
    pub created_at: Option<OffsetDateTime>,
    pub like_count: Option<u64>,
    pub retweet_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub quote_count: Option<u64>,
    /// Attachment media keys, empty when the post has no attachments
    pub media_keys: Vec<String>,
}

/// A page of posts with the response's side-loaded media objects
#[derive(Debug, Clone, Default)]
pub struct PostsPage {
    /// Posts in the platform's returned order
    pub posts: Vec<PostRecord>,
    /// Side-loaded media from the `includes` section, empty when absent
    pub media: Vec<MediaItem>,
}

/// Port for the social platform API
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Create a post with the given text
    async fn create_post(&self, text: &str) -> Result<CreatedPost, PlatformError>;

    /// Look up user metadata by handle
    ///
    /// Returns `Ok(None)` when the platform reports the handle as unknown
    /// (absence, not an error).
    async fn get_user(&self, handle: &str) -> Result<Option<UserRecord>, PlatformError>;

    /// Fetch a user's most recent posts with side-loaded media expansions
    async fn get_user_posts(&self, user_id: &str, max: u32) -> Result<PostsPage, PlatformError>;
}
