use super::reshape;
use crate::{
    connector::{ImmutableProof, ImmutableProofConnector, JsonObject, ProofVerification},
    error::StoreResult,
};
use std::sync::Arc;

/// Creates and verifies immutable proofs.
#[derive(Clone)]
pub struct ImmutableProofStore {
    connector: Arc<dyn ImmutableProofConnector>,
}

impl ImmutableProofStore {
    pub fn new(connector: Arc<dyn ImmutableProofConnector>) -> Self {
        Self { connector }
    }

    /// Create a proof for a JSON-LD object, returning the proof id.
    pub async fn create(&self, proof_object: &JsonObject) -> StoreResult<String> {
        reshape("immutable proof create", self.connector.create(proof_object).await)
    }

    pub async fn get(&self, id: &str) -> StoreResult<ImmutableProof> {
        reshape("immutable proof get", self.connector.get(id).await)
    }

    pub async fn verify(&self, id: &str) -> StoreResult<ProofVerification> {
        reshape("immutable proof verify", self.connector.verify(id).await)
    }

    pub async fn remove_verifiable(&self, id: &str) -> StoreResult<()> {
        reshape("immutable proof remove verifiable", self.connector.remove_verifiable(id).await)
    }
}
