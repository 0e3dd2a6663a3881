use std::sync::Arc;
use std::time::Duration;

use crate::shared::USER_AGENT;
use crate::shared::structs::config::Configuration;
use crate::shared::utility::credits_client::CreditsClient;
use crate::shared::utility::verifier::{Ed25519Verifier, InteractionVerifier};

pub mod config;
pub mod credits;
pub mod discord;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub verifier: Arc<dyn InteractionVerifier>,
    pub credits_client: CreditsClient,
}

impl AppState {
    /// Builds the production state: Ed25519 verification and a pooled HTTP client.
    pub fn new(config: Configuration) -> anyhow::Result<Self> {
        let verifier = Ed25519Verifier::from_hex(&config.secrets.public_key)?;
        Self::with_verifier(config, Arc::new(verifier))
    }

    pub fn with_verifier(
        config: Configuration,
        verifier: Arc<dyn InteractionVerifier>,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let credits_client = CreditsClient::new(
            http_client,
            config.credits_endpoint.clone(),
            config.secrets.credits_api_key.clone(),
        );

        Ok(AppState {
            config: Arc::new(config),
            verifier,
            credits_client,
        })
    }
}
