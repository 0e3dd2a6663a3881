use axum::handler::Handler;
use axum::{Router, middleware::from_fn_with_state, routing::get};
use tracing::Level;

use crate::controller::discord::interaction::handle_interaction;
use crate::controller::root::{greet, not_found};
use crate::shared::middleware::discord_validation::validate_interaction;
use crate::shared::structs::AppState;

pub mod controller;
pub mod shared;

pub fn create_router(app_state: AppState) -> Router {
    let interactions =
        handle_interaction.layer(from_fn_with_state(app_state.clone(), validate_interaction));

    Router::new()
        .route("/", get(greet).post(interactions).fallback(not_found))
        .fallback(not_found)
        .with_state(app_state)
}

pub fn parse_log_level(log_level: &str) -> Level {
    match log_level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::DEBUG,
    }
}

pub fn initialize_tracing(log_level: &str) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(parse_log_level(log_level))
        .pretty()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(
            "Initialization of tracing subscriber failed with error: {}",
            e
        );
    }
}
