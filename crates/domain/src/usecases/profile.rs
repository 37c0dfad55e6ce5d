//! Profile aggregation - user metadata joined with recent posts and their
//! resolved image attachments

use std::sync::Arc;

use crate::model::{MediaIndex, PostSummary, UserProfile};
use crate::ports::{PlatformClient, PlatformError, PostRecord, UserRecord};

/// How many recent posts to attach to an aggregated profile
pub const RECENT_POSTS_LIMIT: u32 = 5;

/// On-demand query path: aggregate a user's public profile
///
/// Independent of the publish pipeline; shares only the platform client.
/// Every invocation builds and discards its own media index, so nothing
/// leaks between queries.
pub struct ProfileAggregator<C>
where
    C: PlatformClient + ?Sized,
{
    client: Arc<C>,
}

impl<C> ProfileAggregator<C>
where
    C: PlatformClient + ?Sized,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch a user's profile and recent posts by handle
    ///
    /// Returns `None` both when the handle is unknown and when the platform
    /// call fails; callers that need to distinguish the two can use
    /// [`try_fetch_user_info`](Self::try_fetch_user_info).
    pub async fn fetch_user_info(&self, handle: &str) -> Option<UserProfile> {
        match self.try_fetch_user_info(handle).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(handle = %handle, error = %e, "Profile aggregation failed");
                None
            }
        }
    }

    /// Fetch a user's profile, surfacing platform errors to the caller
    pub async fn try_fetch_user_info(
        &self,
        handle: &str,
    ) -> Result<Option<UserProfile>, PlatformError> {
        let Some(user) = self.client.get_user(handle).await? else {
            tracing::debug!(handle = %handle, "User not found");
            return Ok(None);
        };

        let page = self
            .client
            .get_user_posts(&user.id, RECENT_POSTS_LIMIT)
            .await?;

        let media_index = MediaIndex::from_media(&page.media);

        let recent_posts: Vec<PostSummary> = page
            .posts
            .into_iter()
            .map(|record| build_post_summary(record, &media_index))
            .collect();

        tracing::debug!(
            handle = %handle,
            posts = recent_posts.len(),
            indexed_media = media_index.len(),
            "Aggregated profile"
        );

        Ok(Some(build_profile(user, recent_posts)))
    }
}

/// Construction boundary where absent wire fields become explicit defaults
fn build_post_summary(record: PostRecord, media_index: &MediaIndex) -> PostSummary {
    let image_urls = media_index.resolve(&record.media_keys);

    PostSummary {
        id: record.id,
        text: record.text,
        created_at: record.created_at,
        like_count: record.like_count.unwrap_or(0),
        retweet_count: record.retweet_count.unwrap_or(0),
        reply_count: record.reply_count.unwrap_or(0),
        quote_count: record.quote_count.unwrap_or(0),
        media_keys: record.media_keys,
        image_urls,
    }
}

fn build_profile(user: UserRecord, recent_posts: Vec<PostSummary>) -> UserProfile {
    UserProfile {
        id: user.id,
        name: user.name,
        handle: user.handle,
        created_at: user.created_at,
        description: user.description.unwrap_or_default(),
        location: user.location,
        profile_image_url: user.profile_image_url,
        url: user.url,
        verified: user.verified.unwrap_or(false),
        followers_count: user.followers_count.unwrap_or(0),
        following_count: user.following_count.unwrap_or(0),
        post_count: user.post_count.unwrap_or(0),
        listed_count: user.listed_count.unwrap_or(0),
        recent_posts,
    }
}
