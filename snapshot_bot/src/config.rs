use std::env;

use anyhow::{Context, Result};

/// Process configuration, read once at startup. Missing or malformed values
/// abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;
        let application_id = env::var("CLIENT_ID")
            .context("CLIENT_ID must be set")?
            .parse()
            .context("CLIENT_ID must be a numeric application id")?;

        Ok(Self {
            discord_token,
            application_id,
        })
    }
}
