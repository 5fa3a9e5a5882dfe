use log::{error, info};
use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};

use crate::commands;
use crate::dependencies::BotDependencies;
use crate::snapshot::handler::handle_snapshot;

/// Gateway event handler. Owns the dependency set for the lifetime of the
/// session.
pub struct Handler {
    deps: BotDependencies,
}

impl Handler {
    pub fn new(deps: BotDependencies) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);

        // A failed registration leaves the bot up without a usable command.
        match commands::register(&ctx).await {
            Ok(()) => info!("✅ Slash command registered."),
            Err(e) => error!("Failed to register slash commands: {}", e),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        if command.data.name != commands::SNAPSHOT_COMMAND {
            return;
        }

        if let Err(e) = handle_snapshot(&ctx, &command, &self.deps).await {
            error!("/snapshot failed: {:#}", e);
        }
    }
}
