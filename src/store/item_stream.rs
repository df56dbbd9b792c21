use super::reshape;
use crate::{
    connector::{GetStreamOptions, ItemStream, ItemStreamConnector, JsonObject, StreamEntry},
    error::StoreResult,
    pager::Page,
};
use std::sync::Arc;

/// Records entries in auditable item streams.
#[derive(Clone)]
pub struct ItemStreamStore {
    connector: Arc<dyn ItemStreamConnector>,
}

impl ItemStreamStore {
    pub fn new(connector: Arc<dyn ItemStreamConnector>) -> Self {
        Self { connector }
    }

    /// Create a stream, returning its id.
    pub async fn create(
        &self,
        annotation_object: Option<&JsonObject>,
        immutable_interval: Option<u32>,
    ) -> StoreResult<String> {
        reshape("item stream create", self.connector.create(annotation_object, immutable_interval).await)
    }

    pub async fn update(&self, id: &str, annotation_object: Option<&JsonObject>) -> StoreResult<()> {
        reshape("item stream update", self.connector.update(id, annotation_object).await)
    }

    /// List a page of streams, starting at the given cursor.
    pub async fn list(&self, cursor: Option<&str>) -> StoreResult<Page<ItemStream>> {
        let list = reshape("item stream list", self.connector.query(cursor).await)?;
        Ok(Page::new(list.item_list_element, list.next_item))
    }

    pub async fn remove(&self, id: &str) -> StoreResult<()> {
        reshape("item stream remove", self.connector.remove(id).await)
    }

    pub async fn get(&self, id: &str, verify_stream: bool, include_entries: bool) -> StoreResult<ItemStream> {
        let options = GetStreamOptions { verify_stream, include_entries };
        reshape("item stream get", self.connector.get(id, &options).await)
    }

    /// Append an entry to a stream, returning the entry id.
    pub async fn create_entry(&self, id: &str, entry_object: &JsonObject) -> StoreResult<String> {
        reshape("item stream entry create", self.connector.create_entry(id, entry_object).await)
    }

    pub async fn update_entry(&self, id: &str, entry_id: &str, entry_object: &JsonObject) -> StoreResult<()> {
        reshape("item stream entry update", self.connector.update_entry(id, entry_id, entry_object).await)
    }

    pub async fn get_entry(&self, id: &str, entry_id: &str) -> StoreResult<StreamEntry> {
        reshape("item stream entry get", self.connector.get_entry(id, entry_id).await)
    }

    pub async fn remove_entry(&self, id: &str, entry_id: &str) -> StoreResult<()> {
        reshape("item stream entry remove", self.connector.remove_entry(id, entry_id).await)
    }

    /// Get a page of a stream's entries.
    pub async fn entries(
        &self,
        id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> StoreResult<Page<StreamEntry>> {
        let list = reshape("item stream entries", self.connector.get_entries(id, cursor, page_size).await)?;
        Ok(Page::new(list.item_list_element, list.next_item))
    }
}
