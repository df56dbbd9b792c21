use crate::{
    connector::EntityStorageConnector,
    error::ConnectorError,
    pager::Page,
    schema::Entity,
};
use async_trait::async_trait;
use std::sync::Mutex;

mod capabilities;
mod entries;
mod streams;

// An entity storage kept in memory, serving pages of two entries with the offset as the cursor.
pub(super) struct MemoryStorage<T> {
    entries: Mutex<Vec<T>>,
}

impl<T: Entity + Clone> MemoryStorage<T> {
    pub(super) fn new(entries: Vec<T>) -> Self {
        Self { entries: Mutex::new(entries) }
    }
}

#[async_trait]
impl<T: Entity + Clone> EntityStorageConnector<T> for MemoryStorage<T> {
    async fn get(&self, id: &str) -> Result<T, ConnectorError> {
        let entries = self.entries.lock().unwrap();
        entries.iter().find(|e| e.id() == id).cloned().ok_or_else(|| not_found(id))
    }

    async fn set(&self, entity: &T) -> Result<(), ConnectorError> {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| e.id() != entity.id());
        entries.push(entity.clone());
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), ConnectorError> {
        self.entries.lock().unwrap().retain(|e| e.id() != id);
        Ok(())
    }

    async fn query(&self, cursor: Option<&str>, page_size: Option<u32>) -> Result<Page<T>, ConnectorError> {
        let entries = self.entries.lock().unwrap();
        let start: usize = match cursor {
            Some(cursor) => cursor.parse().map_err(|_| ConnectorError::Rejected(format!("bad cursor {cursor}")))?,
            None => 0,
        };
        let end = (start + page_size.unwrap_or(2) as usize).min(entries.len());
        let next = (end < entries.len()).then(|| end.to_string());
        Ok(Page::new(entries[start..end].to_vec(), next))
    }
}

pub(super) fn not_found(id: &str) -> ConnectorError {
    ConnectorError::Status { status: 404, message: format!("{id} not found") }
}
