use super::{not_found, MemoryStorage};
use crate::{
    entity::UserNftEntry,
    error::StoreError,
    pager::Pager,
    store::EntryStore,
};
use std::sync::Arc;

fn entry(id: &str) -> UserNftEntry {
    UserNftEntry {
        id: id.into(),
        nft_id: Some(format!("nft:iota:testnet:{id}")),
        issuer: None,
        owner: None,
        tag: Some("playground".into()),
        node_identity: None,
        user_identity: None,
    }
}

fn store(ids: &[&str]) -> EntryStore<UserNftEntry> {
    EntryStore::new(Arc::new(MemoryStorage::new(ids.iter().map(|id| entry(id)).collect())))
}

#[tokio::test]
async fn set_get_remove() {
    let store = store(&[]);
    store.set(&entry("a")).await.expect("set failed");
    assert_eq!(store.get("a").await, Ok(entry("a")));

    store.remove("a").await.expect("remove failed");
    let err = store.get("a").await.expect_err("get succeeded");
    assert_eq!(err, StoreError::from(not_found("a")));
    assert_eq!(err.error, "server responded with status 404: a not found");
}

#[tokio::test]
async fn list_follows_cursor() {
    let store = store(&["a", "b", "c"]);
    let first = store.list(None).await.expect("list failed");
    assert_eq!(first.items, vec![entry("a"), entry("b")]);
    assert_eq!(first.cursor.as_deref(), Some("2"));

    let second = store.list(first.cursor.as_deref()).await.expect("list failed");
    assert_eq!(second.items, vec![entry("c")]);
    assert_eq!(second.cursor, None);
}

#[tokio::test]
async fn list_rejection_is_reshaped() {
    let store = store(&["a"]);
    let err = store.list(Some("x")).await.expect_err("list succeeded");
    assert_eq!(err.error, "bad cursor x");
}

#[tokio::test]
async fn paged_listing() {
    let store = &store(&["a", "b", "c", "d", "e"]);
    let mut pager = Pager::new();

    let ids = |items: Vec<UserNftEntry>| items.into_iter().map(|e| e.id).collect::<Vec<_>>();
    let first = pager.load(|c| async move { store.list(c.as_deref()).await }).await.expect("load failed");
    assert_eq!(ids(first), ["a", "b"]);

    let second = pager.next(|c| async move { store.list(c.as_deref()).await }).await.expect("next failed");
    assert_eq!(second.map(ids), Some(vec!["c".to_string(), "d".to_string()]));
    let third = pager.next(|c| async move { store.list(c.as_deref()).await }).await.expect("next failed");
    assert_eq!(third.map(ids), Some(vec!["e".to_string()]));
    assert!(!pager.can_next());

    let back = pager.previous(|c| async move { store.list(c.as_deref()).await }).await.expect("previous failed");
    assert_eq!(back.map(ids), Some(vec!["c".to_string(), "d".to_string()]));
}
