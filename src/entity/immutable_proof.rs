use super::{id, identities, newest_first};
use crate::schema::{Entity, EntitySchema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable proof requested by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserImmutableProofEntry {
    /// The proof id.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// The node identity it was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    /// The user identity that created it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl Entity for UserImmutableProofEntry {
    const TYPE_NAME: &'static str = "UserImmutableProofEntry";
    const PATH_PREFIX: &'static str = "user-immutable-proof";

    fn schema() -> EntitySchema {
        let [node_identity, user_identity] = identities();
        EntitySchema::new(Self::TYPE_NAME)
            .property(id())
            .property(newest_first("date").optional())
            .property(node_identity)
            .property(user_identity)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
