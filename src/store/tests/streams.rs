use super::not_found;
use crate::{
    connector::{GetStreamOptions, ItemList, ItemStream, ItemStreamConnector, JsonObject, StreamEntry},
    error::ConnectorError,
    store::ItemStreamStore,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

// Keeps streams in memory and serves one stream per page, with entries in pages of the requested size.
#[derive(Default)]
struct FakeStreams {
    streams: Mutex<Vec<ItemStream>>,
}

impl FakeStreams {
    fn with_stream<R>(&self, id: &str, f: impl FnOnce(&mut ItemStream) -> R) -> Result<R, ConnectorError> {
        let mut streams = self.streams.lock().unwrap();
        streams.iter_mut().find(|s| s.id == id).map(f).ok_or_else(|| not_found(id))
    }
}

fn entry_object(text: &str) -> JsonObject {
    json!({ "type": "Note", "content": text }).as_object().cloned().expect("not an object")
}

#[async_trait]
impl ItemStreamConnector for FakeStreams {
    async fn create(
        &self,
        annotation_object: Option<&JsonObject>,
        immutable_interval: Option<u32>,
    ) -> Result<String, ConnectorError> {
        let mut streams = self.streams.lock().unwrap();
        let id = format!("ais:{}", streams.len());
        streams.push(ItemStream {
            id: id.clone(),
            date_created: None,
            date_modified: None,
            annotation_object: annotation_object.cloned(),
            immutable_interval,
            entries: Vec::new(),
            verified: None,
        });
        Ok(id)
    }

    async fn update(&self, id: &str, annotation_object: Option<&JsonObject>) -> Result<(), ConnectorError> {
        self.with_stream(id, |stream| stream.annotation_object = annotation_object.cloned())
    }

    async fn get(&self, id: &str, options: &GetStreamOptions) -> Result<ItemStream, ConnectorError> {
        self.with_stream(id, |stream| {
            let mut stream = stream.clone();
            if !options.include_entries {
                stream.entries.clear();
            }
            stream.verified = options.verify_stream.then_some(true);
            stream
        })
    }

    async fn remove(&self, id: &str) -> Result<(), ConnectorError> {
        let mut streams = self.streams.lock().unwrap();
        let position = streams.iter().position(|s| s.id == id).ok_or_else(|| not_found(id))?;
        streams.remove(position);
        Ok(())
    }

    async fn query(&self, cursor: Option<&str>) -> Result<ItemList<ItemStream>, ConnectorError> {
        let streams = self.streams.lock().unwrap();
        let start = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
        let item_list_element = streams.get(start).cloned().into_iter().collect();
        let next_item = (start + 1 < streams.len()).then(|| (start + 1).to_string());
        Ok(ItemList { item_list_element, next_item })
    }

    async fn create_entry(&self, id: &str, entry_object: &JsonObject) -> Result<String, ConnectorError> {
        self.with_stream(id, |stream| {
            let index = stream.entries.len() as u64;
            let entry_id = format!("{id}:{index}");
            stream.entries.push(StreamEntry {
                id: entry_id.clone(),
                date_created: None,
                index: Some(index),
                entry_object: entry_object.clone(),
                verified: None,
            });
            entry_id
        })
    }

    async fn update_entry(&self, id: &str, entry_id: &str, entry_object: &JsonObject) -> Result<(), ConnectorError> {
        self.with_stream(id, |stream| {
            let entry = stream.entries.iter_mut().find(|e| e.id == entry_id).ok_or_else(|| not_found(entry_id))?;
            entry.entry_object = entry_object.clone();
            Ok(())
        })?
    }

    async fn get_entry(&self, id: &str, entry_id: &str) -> Result<StreamEntry, ConnectorError> {
        self.with_stream(id, |stream| stream.entries.iter().find(|e| e.id == entry_id).cloned())?
            .ok_or_else(|| not_found(entry_id))
    }

    async fn remove_entry(&self, id: &str, entry_id: &str) -> Result<(), ConnectorError> {
        self.with_stream(id, |stream| stream.entries.retain(|e| e.id != entry_id))
    }

    async fn get_entries(
        &self,
        id: &str,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<ItemList<StreamEntry>, ConnectorError> {
        self.with_stream(id, |stream| {
            let start = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0).min(stream.entries.len());
            let end = (start + page_size.unwrap_or(2) as usize).min(stream.entries.len());
            let next_item = (end < stream.entries.len()).then(|| end.to_string());
            ItemList { item_list_element: stream.entries[start..end].to_vec(), next_item }
        })
    }
}

#[tokio::test]
async fn entries_are_paged() {
    let store = ItemStreamStore::new(Arc::new(FakeStreams::default()));
    let id = store.create(None, Some(10)).await.expect("create failed");
    for text in ["one", "two", "three"] {
        store.create_entry(&id, &entry_object(text)).await.expect("create entry failed");
    }

    let page = store.entries(&id, None, None).await.expect("entries failed");
    assert_eq!(page.items.iter().map(|e| e.index).collect::<Vec<_>>(), vec![Some(0), Some(1)]);
    assert_eq!(page.cursor.as_deref(), Some("2"));

    let page = store.entries(&id, page.cursor.as_deref(), None).await.expect("entries failed");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.cursor, None);
}

#[tokio::test]
async fn entry_lifecycle() {
    let store = ItemStreamStore::new(Arc::new(FakeStreams::default()));
    let id = store.create(None, None).await.expect("create failed");
    let entry_id = store.create_entry(&id, &entry_object("draft")).await.expect("create entry failed");

    store.update_entry(&id, &entry_id, &entry_object("final")).await.expect("update entry failed");
    let entry = store.get_entry(&id, &entry_id).await.expect("get entry failed");
    assert_eq!(entry.entry_object["content"], "final");

    store.remove_entry(&id, &entry_id).await.expect("remove entry failed");
    let err = store.get_entry(&id, &entry_id).await.expect_err("get entry succeeded");
    assert_eq!(err.error, format!("server responded with status 404: {entry_id} not found"));
}

#[tokio::test]
async fn get_honors_options() {
    let store = ItemStreamStore::new(Arc::new(FakeStreams::default()));
    let id = store.create(None, None).await.expect("create failed");
    store.create_entry(&id, &entry_object("one")).await.expect("create entry failed");

    let stream = store.get(&id, false, false).await.expect("get failed");
    assert!(stream.entries.is_empty());
    assert_eq!(stream.verified, None);

    let stream = store.get(&id, true, true).await.expect("get failed");
    assert_eq!(stream.entries.len(), 1);
    assert_eq!(stream.verified, Some(true));
}

#[tokio::test]
async fn streams_are_listed_and_removed() {
    let store = ItemStreamStore::new(Arc::new(FakeStreams::default()));
    let annotation = entry_object("shipment");
    let first = store.create(Some(&annotation), None).await.expect("create failed");
    let second = store.create(None, None).await.expect("create failed");

    let page = store.list(None).await.expect("list failed");
    assert_eq!(page.items[0].annotation_object.as_ref(), Some(&annotation));
    assert_eq!(page.cursor.as_deref(), Some("1"));
    let page = store.list(page.cursor.as_deref()).await.expect("list failed");
    assert_eq!(page.items[0].id, second);

    store.remove(&first).await.expect("remove failed");
    let err = store.update(&first, None).await.expect_err("update succeeded");
    assert_eq!(err.error, format!("server responded with status 404: {first} not found"));
}
