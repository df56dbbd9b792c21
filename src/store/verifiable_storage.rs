use super::reshape;
use crate::{
    connector::{VerifiableStorageConnector, VerifiableStorageCreated, VerifiableStorageItem},
    error::StoreResult,
};
use std::sync::Arc;

/// Stores data on the ledger.
#[derive(Clone)]
pub struct VerifiableStorageStore {
    connector: Arc<dyn VerifiableStorageConnector>,
}

impl VerifiableStorageStore {
    pub fn new(connector: Arc<dyn VerifiableStorageConnector>) -> Self {
        Self { connector }
    }

    /// Store some data, returning its id and ledger receipt.
    pub async fn upload(&self, data: &[u8]) -> StoreResult<VerifiableStorageCreated> {
        reshape("verifiable storage upload", self.connector.create(data).await)
    }

    pub async fn get(&self, id: &str, include_data: bool) -> StoreResult<VerifiableStorageItem> {
        reshape("verifiable storage get", self.connector.get(id, include_data).await)
    }

    pub async fn remove(&self, id: &str) -> StoreResult<()> {
        reshape("verifiable storage remove", self.connector.remove(id).await)
    }
}
