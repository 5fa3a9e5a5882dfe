mod bot;
mod commands;
mod config;
mod dependencies;
mod snapshot;

use anyhow::Result;
use serenity::model::id::ApplicationId;
use serenity::prelude::*;
use snapshot_core::holders::handler::HolderClient;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::dependencies::BotDependencies;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    log::info!("Starting snapshot_bot...");

    let config = Config::from_env()?;
    let deps = BotDependencies::new(HolderClient::new());

    let mut client = Client::builder(&config.discord_token, GatewayIntents::GUILDS)
        .application_id(ApplicationId::new(config.application_id))
        .event_handler(Handler::new(deps))
        .await?;

    client.start().await?;

    Ok(())
}
