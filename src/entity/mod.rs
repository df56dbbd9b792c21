mod attestation;
mod document;
mod immutable_proof;
mod nft;
mod verifiable_storage;

pub use attestation::UserAttestationEntry;
pub use document::UserDocumentEntry;
pub use immutable_proof::UserImmutableProofEntry;
pub use nft::UserNftEntry;
pub use verifiable_storage::UserVerifiableStorageEntry;

use crate::schema::{EntitySchemaProperty, PropertyFormat, PropertyType, SortDirection};

// Properties shared by every user entry.
fn id() -> EntitySchemaProperty {
    EntitySchemaProperty::new("id", PropertyType::String).primary()
}

fn optional_string(property: &str) -> EntitySchemaProperty {
    EntitySchemaProperty::new(property, PropertyType::String).optional()
}

fn newest_first(property: &str) -> EntitySchemaProperty {
    EntitySchemaProperty::new(property, PropertyType::String)
        .format(PropertyFormat::DateTime)
        .sort(SortDirection::Descending)
}

fn identities() -> [EntitySchemaProperty; 2] {
    [optional_string("nodeIdentity").secondary(), optional_string("userIdentity").secondary()]
}
