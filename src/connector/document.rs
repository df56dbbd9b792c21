use super::{rest::flag, JsonObject, RestClient, VertexList};
use crate::error::ConnectorError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use url::Url;

const PATH_PREFIX: &str = "documents";

/// An item graph vertex a document is linked to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEdge {
    /// The vertex id.
    pub id: String,

    /// Whether the document id is added to the vertex as an alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_alias: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_annotation_object: Option<JsonObject>,
}

/// A new document.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreate {
    /// The document's own id, e.g. a bill of lading number.
    pub document_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id_format: Option<String>,

    /// The UN/CEFACT document code.
    pub document_code: String,

    #[serde_as(as = "Base64")]
    pub blob: Vec<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auditable_item_graph_edges: Vec<DocumentEdge>,

    /// Attest the document on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_attestation: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_alias: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_annotation_object: Option<JsonObject>,
}

/// A new revision of a document.
///
/// Anything left out is carried over from the current revision.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    #[serde_as(as = "Option<Base64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditable_item_graph_edges: Option<Vec<DocumentEdge>>,
}

/// A revision of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub document_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id_format: Option<String>,

    pub document_code: String,
    pub document_revision: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<JsonObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_storage_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation_id: Option<String>,

    pub date_created: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_deleted: Option<DateTime<Utc>>,
}

/// The revisions of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentList {
    pub item_list_element: Vec<Document>,

    /// The cursor for the next page of revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_item: Option<String>,
}

/// What to include when getting a document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentGetOptions {
    pub include_blob_storage_metadata: bool,
    pub include_blob_storage_data: bool,
    pub include_attestation: bool,

    /// Include revisions that were removed.
    pub include_removed: bool,
}

impl DocumentGetOptions {
    fn query(&self) -> [(&'static str, Option<String>); 4] {
        [
            ("includeBlobStorageMetadata", flag(self.include_blob_storage_metadata)),
            ("includeBlobStorageData", flag(self.include_blob_storage_data)),
            ("includeAttestation", flag(self.include_attestation)),
            ("includeRemoved", flag(self.include_removed)),
        ]
    }
}

/// Manages documents and their revisions.
#[async_trait]
pub trait DocumentManagementConnector: Send + Sync {
    /// Create a document, returning the id of the item graph vertex that holds it.
    async fn create(&self, document: &DocumentCreate) -> Result<String, ConnectorError>;

    /// Add a revision to a document.
    async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<(), ConnectorError>;

    /// Get a page of a document's revisions, newest first.
    async fn get(
        &self,
        id: &str,
        options: &DocumentGetOptions,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<DocumentList, ConnectorError>;

    async fn get_revision(
        &self,
        id: &str,
        revision: u32,
        options: &DocumentGetOptions,
    ) -> Result<Document, ConnectorError>;

    async fn remove_revision(&self, id: &str, revision: u32) -> Result<(), ConnectorError>;

    /// Find the item graph vertices holding documents with the given document id.
    async fn query(
        &self,
        document_id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<VertexList, ConnectorError>;
}

/// A document management service served over REST.
#[derive(Clone, Debug)]
pub struct RestDocumentManagementClient {
    rest: RestClient,
}

impl RestDocumentManagementClient {
    pub fn new(endpoint: &Url) -> Self {
        Self::with_rest(RestClient::new(endpoint, Some(PATH_PREFIX)))
    }

    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    fn get_url(
        &self,
        id: &str,
        options: &DocumentGetOptions,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<Url, ConnectorError> {
        let mut query = options.query().to_vec();
        query.push(("cursor", cursor.map(String::from)));
        query.push(("pageSize", page_size.map(|s| s.to_string())));
        self.rest.route_with_query(&[id], &query)
    }
}

#[async_trait]
impl DocumentManagementConnector for RestDocumentManagementClient {
    async fn create(&self, document: &DocumentCreate) -> Result<String, ConnectorError> {
        self.rest.post_for_location(self.rest.route(&[])?, document).await
    }

    async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<(), ConnectorError> {
        self.rest.put(self.rest.route(&[id])?, update).await
    }

    async fn get(
        &self,
        id: &str,
        options: &DocumentGetOptions,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<DocumentList, ConnectorError> {
        self.rest.get_json(self.get_url(id, options, cursor, page_size)?).await
    }

    async fn get_revision(
        &self,
        id: &str,
        revision: u32,
        options: &DocumentGetOptions,
    ) -> Result<Document, ConnectorError> {
        let revision = revision.to_string();
        let url = self.rest.route_with_query(&[id, revision.as_str()], &options.query())?;
        self.rest.get_json(url).await
    }

    async fn remove_revision(&self, id: &str, revision: u32) -> Result<(), ConnectorError> {
        let revision = revision.to_string();
        self.rest.delete(self.rest.route(&[id, revision.as_str()])?).await
    }

    async fn query(
        &self,
        document_id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<VertexList, ConnectorError> {
        let url = self.rest.route_with_query(
            &[],
            &[
                ("documentId", Some(document_id.to_string())),
                ("cursor", cursor.map(String::from)),
                ("pageSize", page_size.map(|s| s.to_string())),
            ],
        )?;
        self.rest.get_json(url).await
    }
}
