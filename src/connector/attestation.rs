use super::{JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

const PATH_PREFIX: &str = "attestation";

/// The information held about an attestation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationInformation {
    /// The attestation id.
    pub id: String,

    pub date_created: DateTime<Utc>,

    /// The identity that created the attestation.
    pub owner_identity: String,

    /// The identity currently holding the attestation, if it was transferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_identity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_transferred: Option<DateTime<Utc>>,

    /// The attested JSON-LD object.
    pub attestation_object: JsonObject,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<serde_json::Value>,

    /// Whether the proof verified against the ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_failure: Option<String>,
}

/// Creates and verifies attestations.
#[async_trait]
pub trait AttestationConnector: Send + Sync {
    /// Attest a JSON-LD object, returning the new attestation's id.
    async fn create(&self, attestation_object: &JsonObject) -> Result<String, ConnectorError>;

    /// Get and verify an attestation.
    async fn get(&self, id: &str) -> Result<AttestationInformation, ConnectorError>;

    /// Transfer an attestation to a new holder.
    async fn transfer(&self, id: &str, holder_identity: &str, holder_address: &str) -> Result<(), ConnectorError>;

    /// Destroy an attestation.
    async fn destroy(&self, id: &str) -> Result<(), ConnectorError>;
}

/// An attestation service served over REST.
#[derive(Clone, Debug)]
pub struct RestAttestationClient {
    rest: RestClient,
}

impl RestAttestationClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl AttestationConnector for RestAttestationClient {
    async fn create(&self, attestation_object: &JsonObject) -> Result<String, ConnectorError> {
        let body = json!({ "attestationObject": attestation_object });
        self.rest.post_for_location(self.rest.route(&[])?, &body).await
    }

    async fn get(&self, id: &str) -> Result<AttestationInformation, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id])?).await
    }

    async fn transfer(&self, id: &str, holder_identity: &str, holder_address: &str) -> Result<(), ConnectorError> {
        let body = json!({ "holderIdentity": holder_identity, "holderAddress": holder_address });
        self.rest.put(self.rest.route(&[id])?, &body).await
    }

    async fn destroy(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id])?).await
    }
}
