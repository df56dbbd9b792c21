use super::{id, identities, optional_string};
use crate::schema::{Entity, EntitySchema};
use serde::{Deserialize, Serialize};

/// An NFT minted by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNftEntry {
    /// The entry id.
    pub id: String,

    /// The id of the NFT on the ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// The node identity it was created with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_identity: Option<String>,

    /// The user identity that created it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identity: Option<String>,
}

impl Entity for UserNftEntry {
    const TYPE_NAME: &'static str = "UserNftEntry";
    const PATH_PREFIX: &'static str = "user-nft";

    fn schema() -> EntitySchema {
        let [node_identity, user_identity] = identities();
        EntitySchema::new(Self::TYPE_NAME)
            .property(id())
            .property(optional_string("nftId"))
            .property(optional_string("issuer"))
            .property(optional_string("owner"))
            .property(optional_string("tag"))
            .property(node_identity)
            .property(user_identity)
    }

    fn id(&self) -> &str {
        &self.id
    }
}
