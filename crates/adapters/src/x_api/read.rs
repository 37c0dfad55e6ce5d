//! X API read requests: user lookup and recent posts with media expansions

use news_herald_domain::{
    MediaItem, MediaKind, PlatformError, PostRecord, PostsPage, UserRecord,
};
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::XPlatformClient;

const USER_FIELDS: &str =
    "created_at,description,location,profile_image_url,url,verified,public_metrics";
const TWEET_FIELDS: &str = "created_at,public_metrics,text,attachments";
const MEDIA_FIELDS: &str = "media_key,type,url,preview_image_url";

impl XPlatformClient {
    pub(super) async fn get_user_request(
        &self,
        handle: &str,
    ) -> Result<Option<UserRecord>, PlatformError> {
        let url = format!(
            "{}/2/users/by/username/{}?user.fields={}",
            self.base_url, handle, USER_FIELDS
        );

        tracing::debug!(handle = %handle, "Looking up user");

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let response = Self::check_status(response, "Get user").await?;

        let user_response: UserResponse = response
            .json()
            .await
            .map_err(|e| PlatformError::Api(e.to_string()))?;

        // An unknown handle comes back as a payload without `data`
        Ok(user_response.data.map(UserRecord::from))
    }

    pub(super) async fn get_user_posts_request(
        &self,
        user_id: &str,
        max: u32,
    ) -> Result<PostsPage, PlatformError> {
        let url = format!(
            "{}/2/users/{}/tweets?max_results={}&tweet.fields={}&expansions=attachments.media_keys&media.fields={}",
            self.base_url, user_id, max, TWEET_FIELDS, MEDIA_FIELDS
        );

        tracing::debug!(user_id = %user_id, max = max, "Fetching recent posts");

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let response = Self::check_status(response, "Get user posts").await?;

        let posts_response: PostsResponse = response
            .json()
            .await
            .map_err(|e| PlatformError::Api(e.to_string()))?;

        let posts = posts_response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(PostRecord::from)
            .collect();

        let media = posts_response
            .includes
            .and_then(|includes| includes.media)
            .unwrap_or_default()
            .into_iter()
            .map(MediaItem::from)
            .collect();

        Ok(PostsPage { posts, media })
    }
}

#[derive(Deserialize)]
struct UserResponse {
    data: Option<ApiUser>,
}

#[derive(Deserialize)]
struct ApiUser {
    id: String,
    name: String,
    username: String,
    created_at: Option<String>,
    description: Option<String>,
    location: Option<String>,
    profile_image_url: Option<String>,
    url: Option<String>,
    verified: Option<bool>,
    public_metrics: Option<ApiUserMetrics>,
}

#[derive(Deserialize, Default)]
struct ApiUserMetrics {
    followers_count: Option<u64>,
    following_count: Option<u64>,
    tweet_count: Option<u64>,
    listed_count: Option<u64>,
}

#[derive(Deserialize)]
struct PostsResponse {
    data: Option<Vec<ApiPost>>,
    includes: Option<ApiIncludes>,
}

#[derive(Deserialize)]
struct ApiPost {
    id: String,
    text: String,
    created_at: Option<String>,
    public_metrics: Option<ApiPostMetrics>,
    attachments: Option<ApiAttachments>,
}

#[derive(Deserialize, Default)]
struct ApiPostMetrics {
    like_count: Option<u64>,
    retweet_count: Option<u64>,
    reply_count: Option<u64>,
    quote_count: Option<u64>,
}

#[derive(Deserialize)]
struct ApiAttachments {
    media_keys: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ApiIncludes {
    media: Option<Vec<ApiMedia>>,
}

#[derive(Deserialize)]
struct ApiMedia {
    media_key: String,
    #[serde(rename = "type")]
    kind: String,
    url: Option<String>,
    preview_image_url: Option<String>,
}

fn parse_timestamp(value: Option<&str>) -> Option<OffsetDateTime> {
    value.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
}

impl From<ApiUser> for UserRecord {
    fn from(user: ApiUser) -> Self {
        let metrics = user.public_metrics.unwrap_or_default();
        Self {
            id: user.id,
            name: user.name,
            handle: user.username,
            created_at: parse_timestamp(user.created_at.as_deref()),
            description: user.description,
            location: user.location,
            profile_image_url: user.profile_image_url,
            url: user.url,
            verified: user.verified,
            followers_count: metrics.followers_count,
            following_count: metrics.following_count,
            post_count: metrics.tweet_count,
            listed_count: metrics.listed_count,
        }
    }
}

impl From<ApiPost> for PostRecord {
    fn from(post: ApiPost) -> Self {
        let metrics = post.public_metrics.unwrap_or_default();
        Self {
            id: post.id,
            text: post.text,
            created_at: parse_timestamp(post.created_at.as_deref()),
            like_count: metrics.like_count,
            retweet_count: metrics.retweet_count,
            reply_count: metrics.reply_count,
            quote_count: metrics.quote_count,
            media_keys: post
                .attachments
                .and_then(|a| a.media_keys)
                .unwrap_or_default(),
        }
    }
}

impl From<ApiMedia> for MediaItem {
    fn from(media: ApiMedia) -> Self {
        Self {
            media_key: media.media_key,
            kind: MediaKind::from_api(&media.kind),
            url: media.url,
            preview_image_url: media.preview_image_url,
        }
    }
}
