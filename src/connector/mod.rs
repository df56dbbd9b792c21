//! Clients for the remote capabilities the playground exercises.
//!
//! Every capability is described by a trait so that stores can be driven by either the REST clients in
//! this module or any other implementation, such as an in-process fake.

mod attestation;
mod document;
mod entity_storage;
mod identity;
mod immutable_proof;
mod information;
mod item_graph;
mod item_stream;
mod logging;
mod nft;
mod rest;
mod telemetry;
mod verifiable_storage;

pub use attestation::{AttestationConnector, AttestationInformation, RestAttestationClient};
pub use document::{
    Document, DocumentCreate, DocumentEdge, DocumentGetOptions, DocumentList, DocumentManagementConnector,
    DocumentUpdate, RestDocumentManagementClient,
};
pub use entity_storage::{EntityStorageConnector, RestEntityStorageClient};
pub use identity::{DidDocument, IdentityResolverConnector, RestIdentityResolverClient};
pub use immutable_proof::{ImmutableProof, ImmutableProofConnector, ProofVerification, RestImmutableProofClient};
pub use information::{
    ComponentHealth, HealthStatus, InformationConnector, RestInformationClient, ServerHealth, ServerInfo,
};
pub use item_graph::{
    GetVertexOptions, ItemGraphConnector, ItemGraphVertex, RestItemGraphClient, VerifyDepth, VertexAlias, VertexChanges,
    VertexEdge, VertexList, VertexResource,
};
pub use item_stream::{GetStreamOptions, ItemList, ItemStream, ItemStreamConnector, RestItemStreamClient, StreamEntry};
pub use logging::{LogEntry, LogLevel, LogQuery, LoggingConnector, RestLoggingClient};
pub use nft::{NftConnector, NftInformation, NftMint, NftTransfer, RestNftClient};
pub use rest::RestClient;
pub use telemetry::{
    metric_type_labels, MetricType, MetricValue, MetricValueChange, MetricValues, MetricWithValue, RestTelemetryClient,
    TelemetryConnector, TelemetryMetric, ValuesQuery,
};
pub use verifiable_storage::{
    RestVerifiableStorageClient, VerifiableStorageConnector, VerifiableStorageCreated, VerifiableStorageItem,
};

use crate::pager::Page;
use serde::Deserialize;

/// A JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// The shape of paged query responses.
#[derive(Deserialize)]
struct EntitiesPage<T> {
    entities: Vec<T>,

    #[serde(default)]
    cursor: Option<String>,
}

impl<T> From<EntitiesPage<T>> for Page<T> {
    fn from(page: EntitiesPage<T>) -> Self {
        Self { items: page.entities, cursor: page.cursor }
    }
}
