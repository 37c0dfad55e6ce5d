//! Run command - the scheduled fetch-compose-publish pipeline

use anyhow::{Context, Result};
use news_herald_adapters::{
    feed::RssFeedSource,
    x::{StubPlatformClient, XCredentials, XPlatformClient},
};
use news_herald_domain::{
    PlatformClient,
    usecases::{Pipeline, PipelineConfig, Publisher},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::args::RunArgs;
use crate::config::AppConfig;

pub async fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    tracing::info!(
        dry_run = args.dry_run,
        once = args.once,
        feeds = config.feeds.urls.len(),
        interval_hours = config.schedule.interval_hours,
        "Starting news-herald run"
    );

    if config.feeds.urls.is_empty() {
        tracing::warn!("No feed URLs configured; every tick will be a no-op");
    }

    // Build dependencies. Missing credentials abort here, before any
    // scheduled work begins.
    let feed_source = Arc::new(RssFeedSource::new());

    let client: Arc<dyn PlatformClient> = if args.dry_run {
        Arc::new(StubPlatformClient)
    } else {
        Arc::new(build_platform_client(&config)?)
    };

    let pipeline = Pipeline::new(
        feed_source,
        Publisher::new(client),
        PipelineConfig {
            feed_urls: config.feeds.urls.clone(),
        },
    );

    if args.once {
        tracing::info!("Running single tick");
        pipeline.run_once().await;
    } else {
        let tick_interval = Duration::from_secs(config.schedule.interval_hours * 3600);
        let mut ticker = interval(tick_interval);
        // A tick that outlives the interval must be skipped, never overlapped:
        // the pipeline holds no internal locking and concurrent ticks could
        // duplicate posts.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Set up graceful shutdown
        let shutdown = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            tracing::info!("Shutdown signal received");
        };

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    pipeline.run_once().await;
                }
                _ = &mut shutdown => {
                    tracing::info!("Shutting down gracefully");
                    break;
                }
            }
        }
    }

    tracing::info!("news-herald run completed");
    Ok(())
}

pub(crate) fn build_platform_client(config: &AppConfig) -> Result<XPlatformClient> {
    let credentials = XCredentials::from_env(
        &config.x.api_key_env,
        &config.x.api_secret_env,
        &config.x.access_token_env,
        &config.x.access_token_secret_env,
    )
    .context("X API credentials are not fully configured")?;

    Ok(XPlatformClient::new(credentials))
}
