use serde::{Deserialize, Serialize};

use crate::shared::EPHEMERAL_CREDITS_THRESHOLD;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CreditsRequest {
    pub discord_uid: String,
    pub r#type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CreditsResponse {
    pub message: String,
    #[serde(default)]
    pub credits: Option<f64>,
}

impl CreditsResponse {
    /// Low or unknown balances are only shown to the user who asked.
    pub fn is_private(&self) -> bool {
        match self.credits {
            Some(credits) => credits <= EPHEMERAL_CREDITS_THRESHOLD,
            None => true,
        }
    }
}
