use super::{id, identities, newest_first};
use crate::schema::{Entity, EntitySchema, EntitySchemaProperty, PropertyType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document a user placed under document management.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocumentEntry {
    /// The entry id.
    pub id: String,

    /// The managed document id.
    pub document_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,

    pub date_created: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// The node identity it was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    /// The user identity that created it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl Entity for UserDocumentEntry {
    const TYPE_NAME: &'static str = "UserDocumentEntry";
    const PATH_PREFIX: &'static str = "user-document";

    fn schema() -> EntitySchema {
        let [node_identity, user_identity] = identities();
        EntitySchema::new(Self::TYPE_NAME)
            .property(id())
            .property(EntitySchemaProperty::new("documentId", PropertyType::String).secondary())
            .property(EntitySchemaProperty::new("revision", PropertyType::Number).optional())
            .property(newest_first("dateCreated"))
            .property(newest_first("lastUpdated"))
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

    #[test]
    fn both_dates_sort_newest_first() {
        let schema = UserDocumentEntry::schema();
        let sorted: Vec<_> = schema.sort_keys().map(|(p, _)| p.property.as_str()).collect();
        assert_eq!(sorted, ["dateCreated", "lastUpdated"]);
    }
}
