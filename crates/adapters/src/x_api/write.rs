//! X API write requests: post creation

use news_herald_domain::{CreatedPost, PlatformError};
use serde::{Deserialize, Serialize};

use super::XPlatformClient;

#[derive(Serialize)]
struct CreatePostRequest {
    text: String,
}

#[derive(Deserialize)]
struct CreatePostResponse {
    data: CreatedPostData,
}

#[derive(Deserialize)]
struct CreatedPostData {
    id: String,
}

impl XPlatformClient {
    pub(super) async fn create_post_request(
        &self,
        text: &str,
    ) -> Result<CreatedPost, PlatformError> {
        let url = format!("{}/2/tweets", self.base_url);

        let request = CreatePostRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let response = Self::check_status(response, "Create post").await?;

        let post_response: CreatePostResponse = response
            .json()
            .await
            .map_err(|e| PlatformError::Api(e.to_string()))?;

        tracing::info!(post_id = %post_response.data.id, "Created post");

        Ok(CreatedPost {
            id: post_response.data.id,
        })
    }
}
