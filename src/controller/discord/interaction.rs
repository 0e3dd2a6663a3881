use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serenity::all::CreateInteractionResponse;

use crate::controller::discord::credits::credits;
use crate::shared::DEFAULT_CREDIT_KIND;
use crate::shared::error::InteractionError;
use crate::shared::structs::AppState;
use crate::shared::structs::discord::command::Command;
use crate::shared::structs::discord::interaction::{Interaction, InteractionType};

pub async fn handle_interaction(
    State(app_state): State<AppState>,
    Extension(interaction): Extension<Interaction>,
) -> Response {
    tracing::debug!("Received incoming interaction: {:?}", &interaction);

    match dispatch(&interaction, &app_state).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::warn!("{}", &e);
            e.into_response()
        }
    }
}

pub async fn dispatch(
    interaction: &Interaction,
    app_state: &AppState,
) -> Result<CreateInteractionResponse, InteractionError> {
    match interaction.r#type {
        InteractionType::Ping => Ok(CreateInteractionResponse::Pong),
        InteractionType::ApplicationCommand => {
            let name = interaction.command_name().unwrap_or_default();
            let command = Command::from_name(name)
                .ok_or_else(|| InteractionError::UnknownType(format!("command \"{name}\"")))?;

            handle_command(command, interaction, app_state).await
        }
        other => {
            let custom_id = interaction
                .data
                .as_ref()
                .and_then(|data| data.custom_id.as_deref())
                .unwrap_or("none");

            Err(InteractionError::UnknownType(format!(
                "interaction type {} (custom_id {})",
                u8::from(other),
                custom_id
            )))
        }
    }
}

async fn handle_command(
    command: Command,
    interaction: &Interaction,
    app_state: &AppState,
) -> Result<CreateInteractionResponse, InteractionError> {
    let response = match command {
        Command::Credits => {
            credits(interaction.invoking_user_id(), DEFAULT_CREDIT_KIND, app_state).await
        }
    };

    Ok(response)
}
