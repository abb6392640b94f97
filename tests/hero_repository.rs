//! Hero Repository Tests
//!
//! Storage-level properties the HTTP surface cannot observe directly:
//! - `secret_name` is persisted and survives partial updates
//! - Ids are unique under concurrent creation
//! - Data outlives the pool that wrote it

use heroes::model::{HeroCreate, HeroUpdate, Patch};
use heroes::repository::{HeroRepository, Store, StoreConfig};
use heroes::schema::hero_schema;
use std::collections::HashSet;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

async fn open(tmp: &TempDir) -> Store {
    let store = Store::open(&StoreConfig::with_path(tmp.path().join("heroes.db")))
        .await
        .unwrap();
    store.ensure_schema(hero_schema()).await.unwrap();
    store
}

fn hero(name: &str, secret_name: &str, age: Option<i64>) -> HeroCreate {
    HeroCreate {
        name: name.to_string(),
        age,
        secret_name: secret_name.to_string(),
    }
}

// =============================================================================
// Round Trip Tests
// =============================================================================

/// Everything written on create comes back on get, secret included.
#[tokio::test]
async fn test_create_then_get_round_trip() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp).await;
    let repo = HeroRepository::new();
    let mut conn = store.session().await.unwrap();

    let created = repo
        .create(&mut conn, hero("Rusty-Man", "Tommy Sharp", Some(48)))
        .await
        .unwrap();
    let fetched = repo.get(&mut conn, created.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, "Rusty-Man");
    assert_eq!(fetched.age, Some(48));
    assert_eq!(fetched.secret_name, "Tommy Sharp");
}

/// Absent fields are never nulled, whichever field is patched.
#[tokio::test]
async fn test_update_leaves_absent_fields() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp).await;
    let repo = HeroRepository::new();
    let mut conn = store.session().await.unwrap();

    let created = repo
        .create(&mut conn, hero("Deadpond", "Dive Wilson", Some(30)))
        .await
        .unwrap();

    repo.update(
        &mut conn,
        created.id,
        HeroUpdate {
            secret_name: Patch::Set("Wade".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = repo.get(&mut conn, created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Deadpond");
    assert_eq!(stored.age, Some(30));
    assert_eq!(stored.secret_name, "Wade");
    assert_eq!(stored.id, created.id);
}

/// Data written through one pool is visible to the next one.
#[tokio::test]
async fn test_data_persists_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let repo = HeroRepository::new();

    let id = {
        let store = open(&tmp).await;
        let mut conn = store.session().await.unwrap();
        let created = repo
            .create(&mut conn, hero("Deadpond", "Dive Wilson", None))
            .await
            .unwrap();
        drop(conn);
        store.close().await;
        created.id
    };

    let store = open(&tmp).await;
    let mut conn = store.session().await.unwrap();
    let fetched = repo.get(&mut conn, id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Deadpond");
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Each request uses its own session; ids stay unique.
#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let repo = HeroRepository::new();
            let mut conn = store.session().await.unwrap();
            repo.create(&mut conn, hero(&format!("hero-{i}"), "x", None))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }
    assert_eq!(ids.len(), 8);

    let repo = HeroRepository::new();
    let mut conn = store.session().await.unwrap();
    assert_eq!(repo.list(&mut conn, 0, 100).await.unwrap().len(), 8);
}

/// A deleted id is never handed out again.
#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp).await;
    let repo = HeroRepository::new();
    let mut conn = store.session().await.unwrap();

    let first = repo.create(&mut conn, hero("A", "a", None)).await.unwrap();
    repo.delete(&mut conn, first.id).await.unwrap();
    let second = repo.create(&mut conn, hero("B", "b", None)).await.unwrap();

    assert_ne!(first.id, second.id);
}
