//! The playground node's engine configuration extension.
//!
//! The node runs a stock engine and adds one custom entity storage per user entry entity, but only for
//! the capabilities its configuration actually provides.

use crate::{
    entity::{
        UserAttestationEntry, UserDocumentEntry, UserImmutableProofEntry, UserNftEntry, UserVerifiableStorageEntry,
    },
    schema::{Entity, EntitySchema},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The component types configured in the engine.
///
/// Each list holds the engine's own type configurations, which are opaque here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineTypes {
    #[serde(default)]
    pub attestation_connector: Vec<serde_json::Value>,

    #[serde(default)]
    pub nft_connector: Vec<serde_json::Value>,

    #[serde(default)]
    pub verifiable_storage_connector: Vec<serde_json::Value>,

    #[serde(default)]
    pub immutable_proof_component: Vec<serde_json::Value>,

    #[serde(default)]
    pub document_management_component: Vec<serde_json::Value>,
}

/// A custom entity storage the engine creates on startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityStorage {
    #[serde(rename = "type")]
    pub type_name: String,

    /// The path the storage is served under.
    pub path_prefix: String,

    pub schema: EntitySchema,
}

impl CustomEntityStorage {
    /// The storage for an entity.
    pub fn of<T: Entity>() -> Self {
        Self { type_name: T::TYPE_NAME.into(), path_prefix: T::PATH_PREFIX.into(), schema: T::schema() }
    }
}

/// The parts of the engine configuration the playground extends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub types: EngineTypes,

    #[serde(default)]
    pub custom_entity_storage: Vec<CustomEntityStorage>,
}

impl EngineConfig {
    fn add_custom_entity_storage<T: Entity>(&mut self, capability: &str, configured: bool) {
        if !configured {
            debug!(entity = T::TYPE_NAME, capability, "capability not configured, skipping custom entity storage");
            return;
        }
        if self.custom_entity_storage.iter().any(|s| s.type_name == T::TYPE_NAME) {
            debug!(entity = T::TYPE_NAME, "custom entity storage already registered");
            return;
        }
        info!(entity = T::TYPE_NAME, path_prefix = T::PATH_PREFIX, "registering custom entity storage");
        self.custom_entity_storage.push(CustomEntityStorage::of::<T>());
    }
}

/// Add the playground's entity storages to the engine configuration.
///
/// An entry storage is only added when the capability it records is configured.
pub fn extend_config(config: &mut EngineConfig) {
    let types = &config.types;
    let attestation = !types.attestation_connector.is_empty();
    let nft = !types.nft_connector.is_empty();
    let verifiable_storage = !types.verifiable_storage_connector.is_empty();
    let immutable_proof = !types.immutable_proof_component.is_empty();
    let document = !types.document_management_component.is_empty();

    config.add_custom_entity_storage::<UserAttestationEntry>("attestationConnector", attestation);
    config.add_custom_entity_storage::<UserNftEntry>("nftConnector", nft);
    config.add_custom_entity_storage::<UserVerifiableStorageEntry>("verifiableStorageConnector", verifiable_storage);
    config.add_custom_entity_storage::<UserImmutableProofEntry>("immutableProofComponent", immutable_proof);
    config.add_custom_entity_storage::<UserDocumentEntry>("documentManagementComponent", document);
}
