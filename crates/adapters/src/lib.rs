//! news-herald adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `feed`: RSS/Atom feed source
//! - `x`: X (Twitter) API platform client, plus a no-I/O stub for dry runs

mod feed_rss;

pub mod x_api;

/// Re-exports for feed adapters
pub mod feed {
    pub use crate::feed_rss::RssFeedSource;
}

/// Re-exports for X API adapters
pub mod x {
    pub use crate::x_api::{CredentialsError, StubPlatformClient, XCredentials, XPlatformClient};
}
