//! Domain models and value objects

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A candidate article pulled from a syndication feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    pub title: String,
    /// Link to the article
    pub link: String,
}

/// A message ready for publishing, derived from a single article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// The rendered text, within the platform length budget
    pub text: String,
}

/// A user's public profile with their recent posts attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Platform-specific user ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Public username / screen name
    pub handle: String,
    /// Account creation time, when the platform returned it
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Profile description / bio
    pub description: String,
    /// Self-reported location
    pub location: Option<String>,
    /// Avatar URL
    pub profile_image_url: Option<String>,
    /// Profile link
    pub url: Option<String>,
    /// Whether the account is verified
    pub verified: bool,
    pub followers_count: u64,
    pub following_count: u64,
    pub post_count: u64,
    pub listed_count: u64,
    /// Recent posts in the platform's returned order (reverse-chronological)
    pub recent_posts: Vec<PostSummary>,
}

/// A single recent post with resolved image attachments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Platform-specific post ID
    pub id: String,
    /// Post text content
    pub text: String,
    /// When the post was created, when the platform returned it
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    pub like_count: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    /// Media keys referenced by the post's attachments, verbatim
    pub media_keys: Vec<String>,
    /// Direct image URLs resolved from `media_keys`, in key order
    pub image_urls: Vec<String>,
}

/// Kind of a side-loaded media object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    Other,
}

impl MediaKind {
    /// Map the platform's media type string; unknown kinds become `Other`
    pub fn from_api(kind: &str) -> Self {
        match kind {
            "photo" => Self::Photo,
            "video" => Self::Video,
            _ => Self::Other,
        }
    }
}

/// A media object side-loaded in the platform response's `includes` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Opaque key linking attachments to this object
    pub media_key: String,
    pub kind: MediaKind,
    /// Direct URL, present for photos
    pub url: Option<String>,
    /// Preview image URL, the fallback when `url` is absent
    pub preview_image_url: Option<String>,
}

/// Transient lookup from media key to a resolved image URL
///
/// Built from a response's side-loaded media list and discarded with it.
/// Only photos contribute entries; videos and unknown kinds never resolve
/// to an image URL.
#[derive(Debug, Default)]
pub struct MediaIndex {
    entries: HashMap<String, String>,
}

impl MediaIndex {
    /// Build an index from side-loaded media objects
    ///
    /// Prefers `url`, falls back to `preview_image_url`. Last write wins on
    /// duplicate keys, though the platform should not produce duplicates.
    pub fn from_media(media: &[MediaItem]) -> Self {
        let mut entries = HashMap::new();
        for item in media {
            if item.kind != MediaKind::Photo {
                continue;
            }
            let resolved = item.url.as_ref().or(item.preview_image_url.as_ref());
            if let Some(url) = resolved {
                entries.insert(item.media_key.clone(), url.clone());
            }
        }
        Self { entries }
    }

    /// Resolve media keys to image URLs, preserving key order
    ///
    /// Keys with no mapping are skipped, not replaced with a placeholder.
    pub fn resolve(&self, media_keys: &[String]) -> Vec<String> {
        media_keys
            .iter()
            .filter_map(|key| self.entries.get(key).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(key: &str, url: Option<&str>, preview: Option<&str>) -> MediaItem {
        MediaItem {
            media_key: key.to_string(),
            kind: MediaKind::Photo,
            url: url.map(String::from),
            preview_image_url: preview.map(String::from),
        }
    }

    #[test]
    fn index_prefers_url_over_preview() {
        let index = MediaIndex::from_media(&[photo(
            "3_1",
            Some("https://pbs.example/full.jpg"),
            Some("https://pbs.example/preview.jpg"),
        )]);

        assert_eq!(
            index.resolve(&["3_1".to_string()]),
            vec!["https://pbs.example/full.jpg"]
        );
    }

    #[test]
    fn index_falls_back_to_preview_when_url_absent() {
        let index = MediaIndex::from_media(&[photo("3_1", None, Some("X"))]);

        assert_eq!(index.resolve(&["3_1".to_string()]), vec!["X"]);
    }

    #[test]
    fn videos_contribute_no_entry() {
        let index = MediaIndex::from_media(&[MediaItem {
            media_key: "13_9".to_string(),
            kind: MediaKind::Video,
            url: None,
            preview_image_url: Some("https://pbs.example/thumb.jpg".to_string()),
        }]);

        assert!(index.is_empty());
        assert_eq!(index.resolve(&["13_9".to_string()]), Vec::<String>::new());
    }

    #[test]
    fn resolve_preserves_key_order_and_skips_unknown() {
        let index = MediaIndex::from_media(&[
            photo("3_2", Some("b"), None),
            photo("3_1", Some("a"), None),
        ]);

        let keys = vec!["3_1".to_string(), "missing".to_string(), "3_2".to_string()];
        assert_eq!(index.resolve(&keys), vec!["a", "b"]);
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let index = MediaIndex::from_media(&[
            photo("3_1", Some("first"), None),
            photo("3_1", Some("second"), None),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve(&["3_1".to_string()]), vec!["second"]);
    }

    #[test]
    fn media_kind_from_api_maps_unknown_to_other() {
        assert_eq!(MediaKind::from_api("photo"), MediaKind::Photo);
        assert_eq!(MediaKind::from_api("video"), MediaKind::Video);
        assert_eq!(MediaKind::from_api("animated_gif"), MediaKind::Other);
    }
}
