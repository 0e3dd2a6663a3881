use credits_interactions::shared::structs::AppState;
use credits_interactions::shared::structs::config::Configuration;
use credits_interactions::{create_router, initialize_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::load()?;
    initialize_tracing(&config.log_level);

    let server_bind_point = config.bind_address();
    tracing::info!(
        "Serving interactions for application {} on {}",
        &config.secrets.application_id,
        &server_bind_point
    );

    let app = create_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&server_bind_point).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
