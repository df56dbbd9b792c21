//! Stores expose the remote capabilities to the UI.
//!
//! Every operation calls its connector once and reshapes any failure into a [`StoreError`] carrying the
//! rendered error chain. Nothing is retried and no connector error escapes unformatted.
//!
//! Stores are built once, with their connectors, and bundled in a [`PlaygroundContext`] that is handed to
//! whatever needs it.

mod attestation;
mod document;
mod entries;
mod identity;
mod immutable_proof;
mod information;
mod item_graph;
mod item_stream;
mod logging;
mod nft;
mod telemetry;
mod verifiable_storage;

#[cfg(test)]
mod tests;

pub use attestation::AttestationStore;
pub use document::DocumentStore;
pub use entries::EntryStore;
pub use identity::IdentityStore;
pub use immutable_proof::ImmutableProofStore;
pub use information::{InformationStore, ServerStatus};
pub use item_graph::ItemGraphStore;
pub use item_stream::ItemStreamStore;
pub use logging::LoggingStore;
pub use nft::NftStore;
pub use telemetry::TelemetryStore;
pub use verifiable_storage::VerifiableStorageStore;

use crate::{
    config::PlaygroundConfig,
    connector::{
        RestAttestationClient, RestClient, RestDocumentManagementClient, RestEntityStorageClient,
        RestIdentityResolverClient, RestImmutableProofClient, RestInformationClient, RestItemGraphClient,
        RestItemStreamClient, RestLoggingClient, RestNftClient, RestTelemetryClient, RestVerifiableStorageClient,
    },
    entity::{
        UserAttestationEntry, UserDocumentEntry, UserImmutableProofEntry, UserNftEntry, UserVerifiableStorageEntry,
    },
    error::{ConnectorError, StoreError, StoreResult},
    explorer::Explorer,
    schema::Entity,
};
use std::sync::Arc;

// Reshape a connector failure, logging it once.
fn reshape<T>(operation: &'static str, result: Result<T, ConnectorError>) -> StoreResult<T> {
    result.map_err(|e| {
        let error = StoreError::from(e);
        tracing::warn!(operation, error = %error, "remote call failed");
        error
    })
}

/// Every store the playground uses.
#[derive(Clone)]
pub struct PlaygroundContext {
    pub attestations: EntryStore<UserAttestationEntry>,
    pub nfts: EntryStore<UserNftEntry>,
    pub verifiable_storages: EntryStore<UserVerifiableStorageEntry>,
    pub immutable_proofs: EntryStore<UserImmutableProofEntry>,
    pub documents: EntryStore<UserDocumentEntry>,
    pub attestation: AttestationStore,
    pub nft: NftStore,
    pub telemetry: TelemetryStore,
    pub logging: LoggingStore,
    pub item_graph: ItemGraphStore,
    pub item_stream: ItemStreamStore,
    pub verifiable_storage: VerifiableStorageStore,
    pub immutable_proof: ImmutableProofStore,
    pub identity: IdentityStore,
    pub document: DocumentStore,
    pub information: InformationStore,
    pub explorer: Explorer,
}

impl PlaygroundContext {
    /// Bind every store to the REST clients of the configured API.
    ///
    /// All clients share a single connection pool.
    pub fn connect(config: &PlaygroundConfig) -> Self {
        let http = reqwest::Client::new();
        let rest = |prefix: &str| RestClient::with_client(http.clone(), &config.api_url, Some(prefix));
        let verifiable_storage = RestVerifiableStorageClient::with_rest(rest("verifiable"));
        let immutable_proof = RestImmutableProofClient::with_rest(rest("immutable-proof"));
        let document = RestDocumentManagementClient::with_rest(rest("documents"));
        let root = RestClient::with_client(http.clone(), &config.api_url, None);
        let information = RestInformationClient::with_rest(root);
        Self {
            attestations: entry_store(rest(UserAttestationEntry::PATH_PREFIX)),
            nfts: entry_store(rest(UserNftEntry::PATH_PREFIX)),
            verifiable_storages: entry_store(rest(UserVerifiableStorageEntry::PATH_PREFIX)),
            immutable_proofs: entry_store(rest(UserImmutableProofEntry::PATH_PREFIX)),
            documents: entry_store(rest(UserDocumentEntry::PATH_PREFIX)),
            attestation: AttestationStore::new(Arc::new(RestAttestationClient::with_rest(rest("attestation")))),
            nft: NftStore::new(Arc::new(RestNftClient::with_rest(rest("nft")))),
            telemetry: TelemetryStore::new(Arc::new(RestTelemetryClient::with_rest(rest("telemetry")))),
            logging: LoggingStore::new(Arc::new(RestLoggingClient::with_rest(rest("logging")))),
            item_graph: ItemGraphStore::new(Arc::new(RestItemGraphClient::with_rest(rest("aig")))),
            item_stream: ItemStreamStore::new(Arc::new(RestItemStreamClient::with_rest(rest("ais")))),
            verifiable_storage: VerifiableStorageStore::new(Arc::new(verifiable_storage)),
            immutable_proof: ImmutableProofStore::new(Arc::new(immutable_proof)),
            identity: IdentityStore::new(Arc::new(RestIdentityResolverClient::with_rest(rest("identity")))),
            document: DocumentStore::new(Arc::new(document)),
            information: InformationStore::new(Arc::new(information)),
            explorer: Explorer::from_config(config),
        }
    }
}

fn entry_store<T: Entity>(rest: RestClient) -> EntryStore<T> {
    EntryStore::new(Arc::new(RestEntityStorageClient::<T>::with_rest(rest)))
}
