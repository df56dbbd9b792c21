use super::reshape;
use crate::{
    connector::{GetVertexOptions, ItemGraphConnector, ItemGraphVertex, VertexChanges},
    error::StoreResult,
    pager::Page,
};
use std::sync::Arc;

/// Records items in the auditable item graph.
#[derive(Clone)]
pub struct ItemGraphStore {
    connector: Arc<dyn ItemGraphConnector>,
}

impl ItemGraphStore {
    pub fn new(connector: Arc<dyn ItemGraphConnector>) -> Self {
        Self { connector }
    }

    /// Create a vertex, returning its id.
    pub async fn create(&self, vertex: &VertexChanges) -> StoreResult<String> {
        reshape("item graph create", self.connector.create(vertex).await)
    }

    pub async fn update(&self, id: &str, vertex: &VertexChanges) -> StoreResult<()> {
        reshape("item graph update", self.connector.update(id, vertex).await)
    }

    /// List a page of vertices, starting at the given cursor.
    pub async fn list(&self, cursor: Option<&str>) -> StoreResult<Page<ItemGraphVertex>> {
        let list = reshape("item graph list", self.connector.query(cursor).await)?;
        Ok(Page::new(list.item_list_element, list.next_item))
    }

    /// Get a vertex.
    ///
    /// With `extra_data` the vertex comes with its deleted elements and changesets, and every signature in
    /// its history is verified.
    pub async fn get(&self, id: &str, extra_data: bool) -> StoreResult<ItemGraphVertex> {
        let options = if extra_data { GetVertexOptions::full() } else { GetVertexOptions::default() };
        reshape("item graph get", self.connector.get(id, &options).await)
    }

    /// The vertices that can be picked as edge targets, i.e. the first page of the graph.
    pub async fn list_for_edges(&self) -> StoreResult<Vec<ItemGraphVertex>> {
        let list = reshape("item graph list for edges", self.connector.query(None).await)?;
        Ok(list.item_list_element)
    }
}
