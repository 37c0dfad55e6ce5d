//! Pipeline driver - one fetch-compose-publish pass per scheduler tick

use std::sync::Arc;

use crate::ports::{FeedSource, PlatformClient};
use crate::usecases::compose::compose;
use crate::usecases::publish::Publisher;

/// Configuration for the publish pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Feed URLs to pull candidate articles from
    pub feed_urls: Vec<String>,
}

/// Per-tick publish pipeline
///
/// Each tick is atomic from the caller's perspective: it either completes a
/// post or ends as a no-op. Failures are logged and swallowed so a single
/// bad tick never takes down the scheduler.
pub struct Pipeline<F, C>
where
    F: FeedSource + ?Sized,
    C: PlatformClient + ?Sized,
{
    feed_source: Arc<F>,
    publisher: Publisher<C>,
    config: PipelineConfig,
}

impl<F, C> Pipeline<F, C>
where
    F: FeedSource + ?Sized,
    C: PlatformClient + ?Sized,
{
    pub fn new(feed_source: Arc<F>, publisher: Publisher<C>, config: PipelineConfig) -> Self {
        Self {
            feed_source,
            publisher,
            config,
        }
    }

    /// Run a single tick: fetch articles, post the first one
    ///
    /// Selection is deliberately naive: always the first returned article,
    /// with no dedup against previously posted ones. Repeat posts are
    /// possible by design in this version.
    pub async fn run_once(&self) {
        let articles = self.feed_source.fetch(&self.config.feed_urls).await;

        if articles.is_empty() {
            tracing::debug!("No articles fetched, nothing to post");
            return;
        }

        let article = &articles[0];

        if article.title.is_empty() || article.link.is_empty() {
            tracing::warn!(
                title = %article.title,
                link = %article.link,
                "Selected article is missing a title or link, skipping tick"
            );
            return;
        }

        let message = compose(article);

        tracing::info!(
            title = %article.title,
            link = %article.link,
            chars = message.text.chars().count(),
            "Composed message"
        );

        match self.publisher.publish(&message.text).await {
            Ok(post_id) => {
                tracing::info!(post_id = %post_id, "Tick complete");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to publish, tick abandoned");
            }
        }
    }
}
