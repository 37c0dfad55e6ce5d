//! Profile command - on-demand profile aggregation

use anyhow::Result;
use news_herald_domain::{UserProfile, usecases::ProfileAggregator};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::ProfileArgs;
use crate::commands::run::build_platform_client;
use crate::config::AppConfig;

pub async fn execute(args: ProfileArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let client = Arc::new(build_platform_client(&config)?);
    let aggregator = ProfileAggregator::new(client);

    match aggregator.fetch_user_info(&args.handle).await {
        Some(profile) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
        }
        None => {
            // Absence covers both unknown handles and platform failures;
            // the latter are logged by the aggregator.
            println!("No profile found for @{}", args.handle);
        }
    }

    Ok(())
}

fn print_profile(profile: &UserProfile) {
    let verified = if profile.verified { " [verified]" } else { "" };
    println!("{} (@{}){}", profile.name, profile.handle, verified);

    if !profile.description.is_empty() {
        println!("{}", profile.description);
    }
    if let Some(location) = &profile.location {
        println!("Location: {}", location);
    }
    if let Some(url) = &profile.url {
        println!("URL: {}", url);
    }
    if let Some(created_at) = profile.created_at {
        println!("Joined: {}", created_at.date());
    }

    println!(
        "{} followers, {} following, {} posts, listed {} times",
        profile.followers_count, profile.following_count, profile.post_count, profile.listed_count
    );

    if profile.recent_posts.is_empty() {
        println!("\nNo recent posts.");
        return;
    }

    println!("\nRecent posts:");
    for post in &profile.recent_posts {
        println!(
            "- [{}] {} (likes {}, reposts {}, replies {}, quotes {})",
            post.id,
            post.text,
            post.like_count,
            post.retweet_count,
            post.reply_count,
            post.quote_count
        );
        for url in &post.image_urls {
            println!("    image: {}", url);
        }
    }
}
