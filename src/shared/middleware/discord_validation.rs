use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::shared::MAX_INTERACTION_BODY_BYTES;
use crate::shared::structs::AppState;
use crate::shared::utility::verifier::{Verification, verify_discord_request};

/// Rejects unsigned requests with 401 and hands the parsed interaction to the handler.
pub async fn validate_interaction(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match buffer_request_body(body).await {
        Ok(bytes) => bytes,
        Err(e) => return e,
    };

    match verify_discord_request(app_state.verifier.as_ref(), &headers, &bytes) {
        Verification::Invalid => {
            tracing::warn!("Rejected interaction request with an invalid signature.");
            StatusCode::UNAUTHORIZED.into_response()
        }
        Verification::Valid(Err(e)) => {
            tracing::error!("{}", &e);
            e.into_response()
        }
        Verification::Valid(Ok(interaction)) => {
            let mut request = axum::extract::Request::from_parts(parts, Body::from(bytes));
            request.extensions_mut().insert(interaction);
            next.run(request).await
        }
    }
}

async fn buffer_request_body(body: Body) -> Result<Bytes, Response> {
    let bytes = Limited::new(body, MAX_INTERACTION_BODY_BYTES)
        .collect()
        .await
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                tracing::warn!(
                    "Rejected interaction body larger than {} bytes.",
                    MAX_INTERACTION_BODY_BYTES
                );
                return StatusCode::PAYLOAD_TOO_LARGE.into_response();
            }

            let error_msg = format!("Internal server error when collecting body bytes: {e:?}");
            tracing::error!("{}", &error_msg);
            (StatusCode::INTERNAL_SERVER_ERROR, error_msg).into_response()
        })?
        .to_bytes();

    Ok(bytes)
}
