//! RSS/Atom feed source adapter

use async_trait::async_trait;
use feed_rs::parser;
use news_herald_domain::{Article, FeedSource};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("news-herald/", env!("CARGO_PKG_VERSION"));

/// Feed source backed by HTTP fetches of RSS/Atom feeds
///
/// A failing or malformed feed is logged and skipped; the remaining feeds
/// still contribute their articles, so `fetch` itself never fails.
pub struct RssFeedSource {
    client: Client,
}

impl RssFeedSource {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch and parse one feed, in feed order
    async fn fetch_one(&self, url: &str) -> Result<Vec<Article>, FeedFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedFetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedFetchError::Http(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedFetchError::Network(e.to_string()))?;

        let feed = parser::parse(body.as_ref()).map_err(|e| FeedFetchError::Parse(e.to_string()))?;

        let mut articles = Vec::new();
        for entry in feed.entries {
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            if title.is_empty() || link.is_empty() {
                tracing::debug!(feed = %url, entry_id = %entry.id, "Skipping entry missing title or link");
                continue;
            }

            articles.push(Article { title, link });
        }

        Ok(articles)
    }
}

impl Default for RssFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
enum FeedFetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Http(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn fetch(&self, feed_urls: &[String]) -> Vec<Article> {
        let mut articles = Vec::new();

        for url in feed_urls {
            match self.fetch_one(url).await {
                Ok(entries) => {
                    tracing::info!(feed = %url, count = entries.len(), "Fetched feed");
                    articles.extend(entries);
                }
                Err(e) => {
                    tracing::warn!(feed = %url, error = %e, "Skipping feed");
                }
            }
        }

        articles
    }
}
