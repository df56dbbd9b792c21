use super::reshape;
use crate::{
    connector::{NftConnector, NftInformation, NftMint, NftTransfer},
    error::StoreResult,
};
use std::sync::Arc;

/// Mints and manages NFTs.
#[derive(Clone)]
pub struct NftStore {
    connector: Arc<dyn NftConnector>,
}

impl NftStore {
    pub fn new(connector: Arc<dyn NftConnector>) -> Self {
        Self { connector }
    }

    /// Mint an NFT, returning its id.
    pub async fn mint(&self, request: &NftMint) -> StoreResult<String> {
        reshape("nft mint", self.connector.mint(request).await)
    }

    pub async fn resolve(&self, id: &str) -> StoreResult<NftInformation> {
        reshape("nft resolve", self.connector.resolve(id).await)
    }

    pub async fn burn(&self, id: &str) -> StoreResult<()> {
        reshape("nft burn", self.connector.burn(id).await)
    }

    pub async fn transfer(&self, id: &str, request: &NftTransfer) -> StoreResult<()> {
        reshape("nft transfer", self.connector.transfer(id, request).await)
    }
}
