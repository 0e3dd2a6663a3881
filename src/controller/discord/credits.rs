use serenity::all::{
    CreateEmbed, CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::shared::structs::AppState;
use crate::shared::structs::credits::CreditsResponse;
use crate::shared::{
    CREDITS_UNAVAILABLE_MESSAGE, EMBED_COLOR, SHOP_FOOTER, UNKNOWN_USER_MESSAGE,
};

pub async fn credits(
    user_id: Option<&str>,
    kind: &str,
    app_state: &AppState,
) -> CreateInteractionResponse {
    let Some(user_id) = user_id else {
        tracing::warn!("Credits command invoked without a user id.");
        return build_embed_response(UNKNOWN_USER_MESSAGE, true);
    };

    match app_state
        .credits_client
        .request_credits(user_id, kind)
        .await
    {
        Ok(body) => {
            tracing::debug!("Credits API response for {}: {:?}", user_id, &body);
            build_credits_response(&body)
        }
        Err(e) => {
            tracing::error!("Failed to claim {} credits for {}: {}", kind, user_id, e);
            build_embed_response(CREDITS_UNAVAILABLE_MESSAGE, true)
        }
    }
}

pub fn build_credits_response(body: &CreditsResponse) -> CreateInteractionResponse {
    build_embed_response(&body.message, body.is_private())
}

fn build_embed_response(description: &str, ephemeral: bool) -> CreateInteractionResponse {
    let embed = CreateEmbed::new()
        .description(description)
        .color(EMBED_COLOR)
        .footer(CreateEmbedFooter::new(SHOP_FOOTER));

    let mut message = CreateInteractionResponseMessage::new().embed(embed);
    if ephemeral {
        message = message.ephemeral(true);
    }

    CreateInteractionResponse::Message(message)
}
