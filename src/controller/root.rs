use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::shared::NOT_FOUND_MESSAGE;
use crate::shared::structs::AppState;

pub async fn greet(State(app_state): State<AppState>) -> String {
    format!("👋 {}", app_state.config.secrets.application_id)
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
}
