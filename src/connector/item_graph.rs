use super::{rest::flag, JsonObject, RestClient};
use crate::error::ConnectorError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

const PATH_PREFIX: &str = "aig";

/// An alternative id a vertex can be found by.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexAlias {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,
}

/// A resource attached to a vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_object: Option<JsonObject>,
}

/// An edge from a vertex to another one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexEdge {
    /// The id of the target vertex.
    pub id: String,

    pub edge_relationships: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,
}

/// The contents to create a vertex with, or to replace an existing vertex's contents with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<VertexAlias>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<VertexResource>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<VertexEdge>>,
}

/// A vertex in the auditable item graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGraphVertex {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    #[serde(default)]
    pub aliases: Vec<VertexAlias>,

    #[serde(default)]
    pub resources: Vec<VertexResource>,

    #[serde(default)]
    pub edges: Vec<VertexEdge>,

    /// The signed history of the vertex, only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changesets: Option<Vec<serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// A page of vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexList {
    pub item_list_element: Vec<ItemGraphVertex>,

    /// The cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_item: Option<String>,
}

/// How far back signatures are verified when getting a vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyDepth {
    #[default]
    None,
    Current,
    All,
}

/// The options for getting a vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetVertexOptions {
    pub include_deleted: bool,
    pub include_changesets: bool,
    pub verify_signature_depth: VerifyDepth,
}

impl GetVertexOptions {
    /// Everything there is to know about a vertex.
    pub fn full() -> Self {
        Self { include_deleted: true, include_changesets: true, verify_signature_depth: VerifyDepth::All }
    }
}

/// Records items and their relationships in an auditable graph.
#[async_trait]
pub trait ItemGraphConnector: Send + Sync {
    /// Create a vertex, returning its id.
    async fn create(&self, vertex: &VertexChanges) -> Result<String, ConnectorError>;

    async fn update(&self, id: &str, vertex: &VertexChanges) -> Result<(), ConnectorError>;

    async fn get(&self, id: &str, options: &GetVertexOptions) -> Result<ItemGraphVertex, ConnectorError>;

    /// Query a page of vertices, most recently modified first.
    async fn query(&self, cursor: Option<&str>) -> Result<VertexList, ConnectorError>;
}

/// An auditable item graph served over REST.
#[derive(Clone, Debug)]
pub struct RestItemGraphClient {
    rest: RestClient,
}

impl RestItemGraphClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    fn get_url(&self, id: &str, options: &GetVertexOptions) -> Result<Url, ConnectorError> {
        let depth = match options.verify_signature_depth {
            VerifyDepth::None => None,
            VerifyDepth::Current => Some("current".to_string()),
            VerifyDepth::All => Some("all".to_string()),
        };
        self.rest.route_with_query(
            &[id],
            &[
                ("includeDeleted", flag(options.include_deleted)),
                ("includeChangesets", flag(options.include_changesets)),
                ("verifySignatureDepth", depth),
            ],
        )
    }
}

#[async_trait]
impl ItemGraphConnector for RestItemGraphClient {
    async fn create(&self, vertex: &VertexChanges) -> Result<String, ConnectorError> {
        self.rest.post_for_location(self.rest.route(&[])?, vertex).await
    }

    async fn update(&self, id: &str, vertex: &VertexChanges) -> Result<(), ConnectorError> {
        self.rest.put(self.rest.route(&[id])?, vertex).await
    }

    async fn get(&self, id: &str, options: &GetVertexOptions) -> Result<ItemGraphVertex, ConnectorError> {
        self.rest.get_json(self.get_url(id, options)?).await
    }

    async fn query(&self, cursor: Option<&str>) -> Result<VertexList, ConnectorError> {
        let url = self.rest.route_with_query(&[], &[("cursor", cursor.map(String::from))])?;
        self.rest.get_json(url).await
    }
}
