use super::reshape;
use crate::{
    connector::{
        Document, DocumentCreate, DocumentGetOptions, DocumentManagementConnector, DocumentUpdate, ItemGraphVertex,
    },
    error::StoreResult,
    pager::Page,
};
use std::sync::Arc;

/// Manages documents and their revisions.
#[derive(Clone)]
pub struct DocumentStore {
    connector: Arc<dyn DocumentManagementConnector>,
}

impl DocumentStore {
    pub fn new(connector: Arc<dyn DocumentManagementConnector>) -> Self {
        Self { connector }
    }

    /// Create a document, returning the id of the vertex holding it.
    pub async fn create(&self, document: &DocumentCreate) -> StoreResult<String> {
        reshape("document create", self.connector.create(document).await)
    }

    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> StoreResult<()> {
        reshape("document update", self.connector.update(id, update).await)
    }

    /// Get a page of a document's revisions.
    pub async fn get(
        &self,
        id: &str,
        options: &DocumentGetOptions,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> StoreResult<Page<Document>> {
        let list = reshape("document get", self.connector.get(id, options, cursor, page_size).await)?;
        Ok(Page::new(list.item_list_element, list.next_item))
    }

    pub async fn get_revision(&self, id: &str, revision: u32, options: &DocumentGetOptions) -> StoreResult<Document> {
        reshape("document revision get", self.connector.get_revision(id, revision, options).await)
    }

    pub async fn remove_revision(&self, id: &str, revision: u32) -> StoreResult<()> {
        reshape("document revision remove", self.connector.remove_revision(id, revision).await)
    }

    /// Find the vertices holding documents with the given document id.
    pub async fn query(
        &self,
        document_id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> StoreResult<Page<ItemGraphVertex>> {
        let list = reshape("document query", self.connector.query(document_id, cursor, page_size).await)?;
        Ok(Page::new(list.item_list_element, list.next_item))
    }
}
