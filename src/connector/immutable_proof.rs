use super::{JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

const PATH_PREFIX: &str = "immutable-proof";

/// A proof that an object existed, in a given state, at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmutableProof {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,

    /// The id of the object the proof is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_object_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_object_hash: Option<String>,

    /// Where the proof is stored on the ledger, once it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifiable_storage_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<serde_json::Value>,
}

/// The outcome of verifying a proof.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProofVerification {
    pub verified: bool,

    /// Why verification failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Creates and verifies immutable proofs.
#[async_trait]
pub trait ImmutableProofConnector: Send + Sync {
    /// Create a proof for a JSON-LD object, returning the proof id.
    async fn create(&self, proof_object: &JsonObject) -> Result<String, ConnectorError>;

    async fn get(&self, id: &str) -> Result<ImmutableProof, ConnectorError>;

    async fn verify(&self, id: &str) -> Result<ProofVerification, ConnectorError>;

    /// Remove the proof from the ledger, keeping the proof itself.
    async fn remove_verifiable(&self, id: &str) -> Result<(), ConnectorError>;
}

/// An immutable proof service served over REST.
#[derive(Clone, Debug)]
pub struct RestImmutableProofClient {
    rest: RestClient,
}

impl RestImmutableProofClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl ImmutableProofConnector for RestImmutableProofClient {
    async fn create(&self, proof_object: &JsonObject) -> Result<String, ConnectorError> {
        let body = json!({ "proofObject": proof_object });
        self.rest.post_for_location(self.rest.route(&[])?, &body).await
    }

    async fn get(&self, id: &str) -> Result<ImmutableProof, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id])?).await
    }

    async fn verify(&self, id: &str) -> Result<ProofVerification, ConnectorError> {
        self.rest.get_json(self.rest.route(&[id, "verify"])?).await
    }

    async fn remove_verifiable(&self, id: &str) -> Result<(), ConnectorError> {
        self.rest.delete(self.rest.route(&[id, "verifiable"])?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_route() {
        let client = RestImmutableProofClient::new(&Url::parse("https://api.example.com").expect("invalid url"));
        let url = client.rest.route(&["immutable-proof:1", "verify"]).expect("route failed");
        assert_eq!(url.as_str(), "https://api.example.com/immutable-proof/immutable-proof:1/verify");
    }
}
