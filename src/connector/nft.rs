use super::RestClient;
use crate::error::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

const PATH_PREFIX: &str = "nft";

/// The parameters to mint an NFT with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMint {
    pub tag: String,

    /// Metadata that can never change after minting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable_metadata: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// The connector namespace to mint with, when more than one is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The parameters to transfer an NFT with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransfer {
    pub recipient_identity: String,
    pub recipient_address: String,

    /// Replaces the mutable metadata as part of the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A resolved NFT.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftInformation {
    pub issuer: String,
    pub owner: String,
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable_metadata: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Mints and manages NFTs.
#[async_trait]
pub trait NftConnector: Send + Sync {
    /// Mint an NFT, returning its id.
    async fn mint(&self, request: &NftMint) -> Result<String, ConnectorError>;

    async fn resolve(&self, id: &str) -> Result<NftInformation, ConnectorError>;

    async fn burn(&self, id: &str) -> Result<(), ConnectorError>;

    async fn transfer(&self, id: &str, request: &NftTransfer) -> Result<(), ConnectorError>;
}

/// An NFT service served over REST.
#[derive(Clone, Debug)]
pub struct RestNftClient {
    rest: RestClient,
}

impl RestNftClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl NftConnector for RestNftClient {
    async fn mint(&self, request: &NftMint) -> Result<String, ConnectorError> {
        self.rest.post_for_location(self.rest.route(&[])?, request).await
    }

    async fn resolve(&self, id: &str) -> Result<NftInformation, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id])?).await
    }

    async fn burn(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id])?).await
    }

    async fn transfer(&self, id: &str, request: &NftTransfer) -> Result<(), ConnectorError> {
        self.rest.post(self.rest.route(&[id, "transfer"])?, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mint_body_skips_absent_fields() {
        let request = NftMint { tag: "playground".into(), metadata: Some(json!({ "n": 1 })), ..Default::default() };
        let body = serde_json::to_value(&request).expect("serialization failed");
        assert_eq!(body, json!({ "tag": "playground", "metadata": { "n": 1 } }));
    }
}
