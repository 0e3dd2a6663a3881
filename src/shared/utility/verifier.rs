use anyhow::Context;
use axum::http::HeaderMap;

use crate::shared::error::InteractionError;
use crate::shared::structs::discord::interaction::Interaction;
use crate::shared::{SIGNATURE_HEADER, TIMESTAMP_HEADER};

const PUBLIC_KEY_LENGTH: usize = 32;
const SIGNATURE_LENGTH: usize = 64;

/// Checks that an interaction request was signed by Discord.
pub trait InteractionVerifier: Send + Sync {
    fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool;
}

/// Outcome of checking a request and reading its payload.
#[derive(Debug)]
pub enum Verification {
    Invalid,
    Valid(Result<Interaction, InteractionError>),
}

pub fn verify_discord_request(
    verifier: &dyn InteractionVerifier,
    headers: &HeaderMap,
    body: &[u8],
) -> Verification {
    let signature = header_value(headers, SIGNATURE_HEADER);
    let timestamp = header_value(headers, TIMESTAMP_HEADER);

    if !verifier.verify(signature, timestamp, body) {
        return Verification::Invalid;
    }

    Verification::Valid(serde_json::from_slice::<Interaction>(body).map_err(InteractionError::from))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Ed25519 verification of `timestamp || body` against the application's public key.
#[derive(Debug, Clone)]
pub struct Ed25519Verifier {
    public_key: Vec<u8>,
}

impl Ed25519Verifier {
    pub fn from_hex(public_key: &str) -> anyhow::Result<Self> {
        let public_key = hex::decode(public_key.trim())
            .context("Failed to decode application public key from hex value.")?;

        if public_key.len() != PUBLIC_KEY_LENGTH {
            anyhow::bail!(
                "Application public key must be {PUBLIC_KEY_LENGTH} bytes, got {}.",
                public_key.len()
            );
        }

        Ok(Ed25519Verifier { public_key })
    }
}

impl InteractionVerifier for Ed25519Verifier {
    fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool {
        if signature.is_empty() || timestamp.is_empty() {
            tracing::warn!("Interaction request is missing signature headers.");
            return false;
        }

        let signature_bytes = match hex::decode(signature) {
            Ok(bytes) if bytes.len() == SIGNATURE_LENGTH => bytes,
            Ok(bytes) => {
                tracing::warn!("Signature has unexpected length {}.", bytes.len());
                return false;
            }
            Err(e) => {
                tracing::warn!("Failed to decode signature from hex value: {e:?}");
                return false;
            }
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        match nacl::sign::verify(&signature_bytes, &message, &self.public_key) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Failed to verify: {e:?}");
                false
            }
        }
    }
}
