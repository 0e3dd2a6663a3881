//! Publishes the application's slash commands to Discord.
//!
//! Overwrites the global command list, or a single guild's list when
//! `DISCORD_GUILD_ID` is set (guild commands show up immediately, which is
//! handy while testing).

use anyhow::Context;
use serenity::all::{ApplicationId, GuildId, Http};

use credits_interactions::initialize_tracing;
use credits_interactions::shared::structs::discord::command::Command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_tracing(&std::env::var("LOG_LEVEL").unwrap_or_default());

    let token = std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN is required")?;
    let application_id = std::env::var("DISCORD_APPLICATION_ID")
        .context("DISCORD_APPLICATION_ID is required")?;
    let application_id =
        parse_snowflake(&application_id).context("Invalid DISCORD_APPLICATION_ID")?;

    let http = Http::new(&token);
    http.set_application_id(ApplicationId::new(application_id));

    let commands = Command::ALL
        .into_iter()
        .map(Command::to_create_command)
        .collect::<Vec<_>>();

    let registered = match std::env::var("DISCORD_GUILD_ID").ok() {
        Some(guild_id) => {
            let guild_id = parse_snowflake(&guild_id).context("Invalid DISCORD_GUILD_ID")?;
            let guild_id = GuildId::new(guild_id);
            tracing::info!("Registering {} command(s) in guild {}", commands.len(), guild_id);
            http.create_guild_commands(guild_id, &commands).await?
        }
        None => {
            tracing::info!("Registering {} global command(s)", commands.len());
            http.create_global_commands(&commands).await?
        }
    };

    for command in registered {
        tracing::info!("Registered /{} ({})", command.name, command.id);
    }

    Ok(())
}

/// Discord ids are non-zero; serenity panics when handed a zero.
fn parse_snowflake(value: &str) -> anyhow::Result<u64> {
    let id = value.trim().parse::<u64>()?;
    anyhow::ensure!(id != 0, "snowflake must not be 0");
    Ok(id)
}
