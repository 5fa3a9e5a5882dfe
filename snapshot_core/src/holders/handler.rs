use reqwest::Client;
use thiserror::Error;

use crate::holders::dto::{GraphQlRequest, GraphQlResponse, HolderRecord};

/// Subsquid GraphQL API for HyperLiquid NFTs.
pub const HOLDERS_ENDPOINT: &str =
    "https://v2.archive.subsquid.io/network/hyperliquid-mainnet/graphql";

#[derive(Debug, Error)]
pub enum HolderError {
    #[error("holder query failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("holder query returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct HolderClient {
    client: Client,
    endpoint: String,
}

impl HolderClient {
    pub fn new() -> Self {
        Self::with_endpoint(HOLDERS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::new();

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// One-shot holder query. The indexer returns the complete holder set in
    /// a single response, so there is no pagination here. An absent
    /// `data.nftHolders` path decodes to an empty list; transport and decode
    /// failures surface as [`HolderError`].
    pub async fn fetch_holders(&self, contract: &str) -> Result<Vec<HolderRecord>, HolderError> {
        let query = format!(
            "{{ nftHolders(contract: \"{}\") {{ address balance }} }}",
            contract.to_lowercase()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query })
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: GraphQlResponse = serde_json::from_str(&body)?;

        Ok(parsed.data.map(|data| data.nft_holders).unwrap_or_default())
    }
}
