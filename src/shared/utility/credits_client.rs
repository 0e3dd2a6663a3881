use reqwest::header::CONTENT_TYPE;

use crate::shared::API_KEY_HEADER;
use crate::shared::error::CreditsError;
use crate::shared::structs::credits::{CreditsRequest, CreditsResponse};

#[derive(Clone)]
pub struct CreditsClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for CreditsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditsClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl CreditsClient {
    pub fn new(http_client: reqwest::Client, endpoint: String, api_key: String) -> Self {
        CreditsClient {
            http_client,
            endpoint,
            api_key,
        }
    }

    /// Claims credits for `discord_uid`. The body is parsed whatever the status code,
    /// because the service explains refusals in `message`.
    pub async fn request_credits(
        &self,
        discord_uid: &str,
        kind: &str,
    ) -> Result<CreditsResponse, CreditsError> {
        let request = CreditsRequest {
            discord_uid: discord_uid.to_string(),
            r#type: kind.to_string(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        let body = serde_json::from_slice::<CreditsResponse>(&bytes)
            .map_err(|source| CreditsError::Decode { status, source })?;

        if !status.is_success() {
            tracing::warn!(
                "Credits API answered {} for user {}: {}",
                status,
                discord_uid,
                &body.message
            );
        }

        Ok(body)
    }
}
