use super::{JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

const PATH_PREFIX: &str = "identity";

/// A DID document.
///
/// Only the commonly displayed members are typed, everything else is kept as is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_method: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<serde_json::Value>,

    #[serde(flatten)]
    pub other: JsonObject,
}

/// Resolves identities to their documents.
#[async_trait]
pub trait IdentityResolverConnector: Send + Sync {
    async fn resolve(&self, identity: &str) -> Result<DidDocument, ConnectorError>;
}

/// An identity resolver served over REST.
#[derive(Clone, Debug)]
pub struct RestIdentityResolverClient {
    rest: RestClient,
}

impl RestIdentityResolverClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl IdentityResolverConnector for RestIdentityResolverClient {
    async fn resolve(&self, identity: &str) -> Result<DidDocument, ConnectorError> {
        self.rest.get_json(self.rest.route(&[identity])?).await
    }
}
