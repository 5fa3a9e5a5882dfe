use anyhow::{Context as _, Result};
use log::error;
use serenity::builder::{
    CreateAttachment, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use snapshot_core::export::csv::render_csv;
use snapshot_core::export::file::SnapshotFile;

use crate::dependencies::BotDependencies;
use crate::snapshot::dto::{Destination, SnapshotRequest};

/// Shown for a fetch failure and for a genuinely empty collection alike; the
/// indexer response does not let us tell the two apart.
pub const NO_HOLDERS_TEXT: &str = "❌ No holders found or invalid contract address.";

pub const DM_CONFIRMATION_TEXT: &str = "✅ Snapshot sent to your DM.";

fn caption(contract: &str) -> String {
    format!("📦 Snapshot for contract `{}`:", contract)
}

pub async fn handle_snapshot(
    ctx: &Context,
    command: &CommandInteraction,
    deps: &BotDependencies,
) -> Result<()> {
    // Both options are required on the registered command, so this only
    // triggers for invocations built through raw API calls.
    let Some(request) = SnapshotRequest::from_options(&command.data.options) else {
        let reply = CreateInteractionResponseMessage::new()
            .content("Usage: /snapshot contract:<address> destination:<dm|channel>")
            .ephemeral(true);
        command
            .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
            .await?;
        return Ok(());
    };

    // Acknowledge before the network call so the interaction token does not
    // expire while the indexer responds.
    let ack = CreateInteractionResponseMessage::new().ephemeral(request.destination.is_private());
    command
        .create_response(&ctx.http, CreateInteractionResponse::Defer(ack))
        .await?;

    let holders = match deps.holders.fetch_holders(&request.contract).await {
        Ok(holders) => holders,
        Err(e) => {
            error!("Error fetching holders for {}: {}", request.contract, e);
            command
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new().content(NO_HOLDERS_TEXT),
                )
                .await?;
            return Ok(());
        }
    };

    if holders.is_empty() {
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content(NO_HOLDERS_TEXT),
            )
            .await?;
        return Ok(());
    }

    // The guard removes the file when the handler returns, delivery errors
    // included.
    let file = SnapshotFile::write(&request.contract, &render_csv(&holders))
        .context("failed to write snapshot file")?;
    let attachment = CreateAttachment::path(file.path())
        .await
        .context("failed to load snapshot attachment")?;

    match request.destination {
        Destination::Dm => {
            let dm = command.user.create_dm_channel(&ctx.http).await?;
            dm.id
                .send_message(
                    &ctx.http,
                    CreateMessage::new()
                        .content(caption(&request.contract))
                        .add_file(attachment),
                )
                .await?;
            command
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new().content(DM_CONFIRMATION_TEXT),
                )
                .await?;
        }
        Destination::Channel => {
            command
                .edit_response(
                    &ctx.http,
                    EditInteractionResponse::new()
                        .content(caption(&request.contract))
                        .new_attachment(attachment),
                )
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_matches_the_user_facing_message() {
        assert_eq!(
            NO_HOLDERS_TEXT,
            "❌ No holders found or invalid contract address."
        );
    }

    #[test]
    fn caption_names_the_contract() {
        assert_eq!(
            caption("0xABCDEF123"),
            "📦 Snapshot for contract `0xABCDEF123`:"
        );
    }
}
