use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::{INVALID_PAYLOAD_ERROR, UNKNOWN_TYPE_ERROR};

/// Failures of the outbound call to the credits API.
#[derive(Debug, thiserror::Error)]
pub enum CreditsError {
    #[error("Failed to reach the credits API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Credits API answered {status} with an unexpected body: {source}")]
    Decode {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

/// Interactions the dispatcher refuses to handle.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("Failed to deserialize incoming payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Unsupported interaction type or command: {0}")]
    UnknownType(String),
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        let error = match self {
            InteractionError::InvalidPayload(_) => INVALID_PAYLOAD_ERROR,
            InteractionError::UnknownType(_) => UNKNOWN_TYPE_ERROR,
        };

        (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable \"{0}\"")]
    MissingVariable(&'static str),
    #[error("Invalid value for \"{name}\": {value}")]
    InvalidValue { name: &'static str, value: String },
}
