use super::{rest::flag, JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{base64::Base64, serde_as};
use url::Url;

const PATH_PREFIX: &str = "verifiable";

/// The outcome of storing data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiableStorageCreated {
    /// The id of the stored item.
    pub id: String,

    /// The ledger receipt, as JSON-LD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<JsonObject>,
}

/// A stored item.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiableStorageItem {
    /// The stored bytes, only present when requested.
    #[serde_as(as = "Option<Base64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,

    pub receipt: JsonObject,
}

/// Stores data on the ledger.
#[async_trait]
pub trait VerifiableStorageConnector: Send + Sync {
    /// Store some data.
    async fn create(&self, data: &[u8]) -> Result<VerifiableStorageCreated, ConnectorError>;

    /// Get a stored item, along with its data if `include_data` is set.
    async fn get(&self, id: &str, include_data: bool) -> Result<VerifiableStorageItem, ConnectorError>;

    async fn remove(&self, id: &str) -> Result<(), ConnectorError>;
}

/// A verifiable storage served over REST.
#[derive(Clone, Debug)]
pub struct RestVerifiableStorageClient {
    rest: RestClient,
}

impl RestVerifiableStorageClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl VerifiableStorageConnector for RestVerifiableStorageClient {
    async fn create(&self, data: &[u8]) -> Result<VerifiableStorageCreated, ConnectorError> {
        let body = json!({ "data": BASE64_STANDARD.encode(data) });
        self.rest.post_json(self.rest.route(&[])?, &body).await
    }

    async fn get(&self, id: &str, include_data: bool) -> Result<VerifiableStorageItem, ConnectorError> {
        let url = self.rest.route_with_query(&[id], &[("includeData", flag(include_data))])?;
        self.rest.get_json(url).await
    }

    async fn remove(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id])?).await
    }
}
