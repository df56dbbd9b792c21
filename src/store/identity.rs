use super::reshape;
use crate::{
    connector::{DidDocument, IdentityResolverConnector},
    error::StoreResult,
};
use std::sync::Arc;

/// Resolves identities.
#[derive(Clone)]
pub struct IdentityStore {
    connector: Arc<dyn IdentityResolverConnector>,
}

impl IdentityStore {
    pub fn new(connector: Arc<dyn IdentityResolverConnector>) -> Self {
        Self { connector }
    }

    pub async fn resolve(&self, identity: &str) -> StoreResult<DidDocument> {
        reshape("identity resolve", self.connector.resolve(identity).await)
    }
}
