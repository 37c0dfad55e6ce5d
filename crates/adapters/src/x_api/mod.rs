//! X API adapter implementing the platform client port

mod read;
mod stub;
mod write;

pub use stub::StubPlatformClient;

use async_trait::async_trait;
use news_herald_domain::{CreatedPost, PlatformClient, PlatformError, PostsPage, UserRecord};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.x.com";

/// Error type for credential loading
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("missing credential env var {0}")]
    Missing(String),
    #[error("credential env var {0} is empty")]
    Empty(String),
}

/// The four secrets required for any platform call
///
/// Loading fails fast when any is missing or empty, so a misconfigured
/// deployment is surfaced to the operator before scheduled work begins.
pub struct XCredentials {
    pub api_key: SecretString,
    pub api_secret: SecretString,
    pub access_token: SecretString,
    pub access_token_secret: SecretString,
}

impl XCredentials {
    /// Load all four secrets from the named environment variables
    pub fn from_env(
        api_key_env: &str,
        api_secret_env: &str,
        access_token_env: &str,
        access_token_secret_env: &str,
    ) -> Result<Self, CredentialsError> {
        Ok(Self {
            api_key: load_secret(api_key_env)?,
            api_secret: load_secret(api_secret_env)?,
            access_token: load_secret(access_token_env)?,
            access_token_secret: load_secret(access_token_secret_env)?,
        })
    }
}

fn load_secret(env_var: &str) -> Result<SecretString, CredentialsError> {
    let value = std::env::var(env_var)
        .map_err(|_| CredentialsError::Missing(env_var.to_string()))?;

    if value.trim().is_empty() {
        return Err(CredentialsError::Empty(env_var.to_string()));
    }

    Ok(SecretString::new(value.into()))
}

/// X API v2 client for creating posts and reading user data
pub struct XPlatformClient {
    client: Client,
    credentials: XCredentials,
    base_url: String,
}

impl XPlatformClient {
    pub fn new(credentials: XCredentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(credentials: XCredentials, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            credentials,
            base_url,
        }
    }

    fn auth_header(&self) -> String {
        format!(
            "Bearer {}",
            self.credentials.access_token.expose_secret()
        )
    }

    /// Map error statuses to the port error type, pass successes through
    async fn check_status(response: Response, what: &str) -> Result<Response, PlatformError> {
        if response.status() == 401 {
            return Err(PlatformError::Auth("Invalid access token".to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api(format!(
                "{} failed with {}: {}",
                what, status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl PlatformClient for XPlatformClient {
    async fn create_post(&self, text: &str) -> Result<CreatedPost, PlatformError> {
        self.create_post_request(text).await
    }

    async fn get_user(&self, handle: &str) -> Result<Option<UserRecord>, PlatformError> {
        self.get_user_request(handle).await
    }

    async fn get_user_posts(&self, user_id: &str, max: u32) -> Result<PostsPage, PlatformError> {
        self.get_user_posts_request(user_id, max).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_credentials() -> XCredentials {
        XCredentials {
            api_key: SecretString::new("test-api-key".into()),
            api_secret: SecretString::new("test-api-secret".into()),
            access_token: SecretString::new("test-token".into()),
            access_token_secret: SecretString::new("test-token-secret".into()),
        }
    }

    #[test]
    fn from_env_fails_on_missing_var() {
        let result = XCredentials::from_env(
            "NEWS_HERALD_TEST_UNSET_KEY",
            "NEWS_HERALD_TEST_UNSET_SECRET",
            "NEWS_HERALD_TEST_UNSET_TOKEN",
            "NEWS_HERALD_TEST_UNSET_TOKEN_SECRET",
        );

        match result {
            Err(CredentialsError::Missing(var)) => {
                assert_eq!(var, "NEWS_HERALD_TEST_UNSET_KEY");
            }
            other => panic!("expected Missing error, got {:?}", other.err()),
        }
    }
}
