use anyhow::Result;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{Command, CommandOptionType};
use serenity::prelude::Context;

pub const SNAPSHOT_COMMAND: &str = "snapshot";

/// Definition of the single `/snapshot` application command.
pub fn snapshot_command() -> CreateCommand {
    CreateCommand::new(SNAPSHOT_COMMAND)
        .description("Get a snapshot of all holders for an NFT collection")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "contract",
                "Contract address of the NFT collection",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "destination",
                "Where to send the result: dm or channel",
            )
            .add_string_choice("dm", "dm")
            .add_string_choice("channel", "channel")
            .required(true),
        )
}

/// Publish the command set globally, replacing whatever set was registered
/// before for this application.
pub async fn register(ctx: &Context) -> Result<()> {
    Command::set_global_commands(&ctx.http, vec![snapshot_command()]).await?;

    Ok(())
}
