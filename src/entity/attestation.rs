use super::{id, identities, newest_first, optional_string};
use crate::schema::{Entity, EntitySchema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An attestation created by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttestationEntry {
    /// The attestation id.
    pub id: String,

    /// A description of what was attested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the attestation was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// The identity that owns the attestation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_identity: Option<String>,

    /// The node identity it was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    /// The user identity that created it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl Entity for UserAttestationEntry {
    const TYPE_NAME: &'static str = "UserAttestationEntry";
    const PATH_PREFIX: &'static str = "user-attestation";

    fn schema() -> EntitySchema {
        let [node_identity, user_identity] = identities();
        EntitySchema::new(Self::TYPE_NAME)
            .property(id())
            .property(optional_string("description"))
            .property(newest_first("dateCreated").optional())
            .property(optional_string("ownerIdentity"))
            .property(node_identity)
            .property(user_identity)
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_shape() {
        let entry: UserAttestationEntry = serde_json::from_value(json!({
            "id": "attestation:nft:abc",
            "description": "degree",
            "dateCreated": "2024-05-01T10:00:00Z",
            "ownerIdentity": "did:iota:owner"
        }))
        .expect("deserialization failed");
        assert_eq!(entry.date_created, DateTime::from_timestamp(1714557600, 0));
        assert_eq!(entry.node_identity, None);

        let value = serde_json::to_value(&entry).expect("serialization failed");
        assert_eq!(value["ownerIdentity"], "did:iota:owner");
        assert!(value.get("userIdentity").is_none());
    }
}
