use super::reshape;
use crate::{
    connector::{AttestationConnector, AttestationInformation, JsonObject},
    error::StoreResult,
};
use std::sync::Arc;

/// Creates, verifies and manages attestations.
#[derive(Clone)]
pub struct AttestationStore {
    connector: Arc<dyn AttestationConnector>,
}

impl AttestationStore {
    pub fn new(connector: Arc<dyn AttestationConnector>) -> Self {
        Self { connector }
    }

    /// Attest a JSON-LD document, returning the attestation id.
    pub async fn create(&self, attestation_object: &JsonObject) -> StoreResult<String> {
        reshape("attestation create", self.connector.create(attestation_object).await)
    }

    /// Get an attestation along with its verification outcome.
    pub async fn get(&self, id: &str) -> StoreResult<AttestationInformation> {
        reshape("attestation get", self.connector.get(id).await)
    }

    pub async fn transfer(&self, id: &str, holder_identity: &str, holder_address: &str) -> StoreResult<()> {
        reshape("attestation transfer", self.connector.transfer(id, holder_identity, holder_address).await)
    }

    pub async fn destroy(&self, id: &str) -> StoreResult<()> {
        reshape("attestation destroy", self.connector.destroy(id).await)
    }
}
