use super::{id, identities, newest_first, optional_string};
use crate::schema::{Entity, EntitySchema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data a user anchored in verifiable storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVerifiableStorageEntry {
    /// The verifiable storage id.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The stored data, as displayed to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// The node identity it was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    /// The user identity that created it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl Entity for UserVerifiableStorageEntry {
    const TYPE_NAME: &'static str = "UserVerifiableStorageEntry";
    const PATH_PREFIX: &'static str = "user-verifiable-storage";

    fn schema() -> EntitySchema {
        let [node_identity, user_identity] = identities();
        EntitySchema::new(Self::TYPE_NAME)
            .property(id())
            .property(optional_string("description"))
            .property(optional_string("data"))
            .property(newest_first("dateCreated").optional())
            .property(node_identity)
            .property(user_identity)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
