use super::reshape;
use crate::{connector::EntityStorageConnector, error::StoreResult, pager::Page, schema::Entity};
use std::sync::Arc;

/// The entries a user created for one kind of item.
pub struct EntryStore<T: Entity> {
    connector: Arc<dyn EntityStorageConnector<T>>,
}

impl<T: Entity> EntryStore<T> {
    pub fn new(connector: Arc<dyn EntityStorageConnector<T>>) -> Self {
        Self { connector }
    }

    pub async fn get(&self, id: &str) -> StoreResult<T> {
        reshape("entry get", self.connector.get(id).await)
    }

    /// List a page of entries, starting at the given cursor.
    pub async fn list(&self, cursor: Option<&str>) -> StoreResult<Page<T>> {
        reshape("entry list", self.connector.query(cursor, None).await)
    }

    pub async fn set(&self, entry: &T) -> StoreResult<()> {
        reshape("entry set", self.connector.set(entry).await)
    }

    pub async fn remove(&self, id: &str) -> StoreResult<()> {
        reshape("entry remove", self.connector.remove(id).await)
    }
}

impl<T: Entity> Clone for EntryStore<T> {
    fn clone(&self) -> Self {
        Self { connector: self.connector.clone() }
    }
}
