//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::Utc;
use vela_core::{candle::NewCandle, store::CandleStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn candle(owner_id: i64, purpose: &str) -> NewCandle {
  NewCandle::new(owner_id, format!("user-{owner_id}"), purpose, "https://media.example/1.gif")
    .unwrap()
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get() {
  let s = store().await;
  let before = Utc::now();

  let created = s.create(candle(1, "for peace")).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().expect("candle exists");

  assert_eq!(fetched, created);
  assert_eq!(fetched.purpose, "for peace");
  assert_eq!(fetched.owner_id, 1);
  assert_eq!(fetched.owner_name, "user-1");
  assert_eq!(fetched.media_url, "https://media.example/1.gif");
  assert!(fetched.created_at >= before);
}

#[tokio::test]
async fn ids_increase_monotonically() {
  let s = store().await;
  let a = s.create(candle(1, "a")).await.unwrap();
  let b = s.create(candle(1, "a")).await.unwrap();
  assert!(b.id > a.id, "duplicates are not collapsed");
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

// ─── Ownership-gated mutation ────────────────────────────────────────────────

#[tokio::test]
async fn only_owner_can_update_purpose() {
  let s = store().await;
  let c = s.create(candle(1, "for peace")).await.unwrap();

  let by_other = s.update_purpose(c.id, 2, "hijacked".into()).await.unwrap();
  assert!(!by_other);
  assert_eq!(s.get(c.id).await.unwrap().unwrap().purpose, "for peace");

  let by_owner = s.update_purpose(c.id, 1, "for health".into()).await.unwrap();
  assert!(by_owner);
  let after = s.get(c.id).await.unwrap().unwrap();
  assert_eq!(after.purpose, "for health");
  assert_eq!(after.created_at, c.created_at);
  assert_eq!(after.owner_id, 1);
}

#[tokio::test]
async fn update_missing_returns_false() {
  let s = store().await;
  assert!(!s.update_purpose(99, 1, "x".into()).await.unwrap());
}

#[tokio::test]
async fn only_owner_can_delete() {
  let s = store().await;
  let c = s.create(candle(1, "for peace")).await.unwrap();

  assert!(!s.delete(c.id, 2).await.unwrap());
  assert!(s.get(c.id).await.unwrap().is_some());

  assert!(s.delete(c.id, 1).await.unwrap());
  assert!(s.get(c.id).await.unwrap().is_none());

  // Already gone.
  assert!(!s.delete(c.id, 1).await.unwrap());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_recent_is_bounded_and_newest_first() {
  let s = store().await;
  for i in 0..7 {
    s.create(candle(i % 2, &format!("purpose {i}"))).await.unwrap();
  }

  let recent = s.list_recent(5).await.unwrap();
  assert_eq!(recent.len(), 5);
  assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
  assert_eq!(recent[0].purpose, "purpose 6");

  assert_eq!(s.list_recent(50).await.unwrap().len(), 7);
}

#[tokio::test]
async fn list_by_owner_filters() {
  let s = store().await;
  s.create(candle(1, "one")).await.unwrap();
  s.create(candle(2, "two")).await.unwrap();
  s.create(candle(1, "three")).await.unwrap();

  let mine = s.list_by_owner(1).await.unwrap();
  assert_eq!(mine.len(), 2);
  assert!(mine.iter().all(|c| c.owner_id == 1));
  assert_eq!(mine[0].purpose, "three");

  assert!(s.list_by_owner(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_page_windows() {
  let s = store().await;
  for i in 0..23 {
    s.create(candle(1, &format!("p{i}"))).await.unwrap();
  }
  assert_eq!(s.count().await.unwrap(), 23);

  let first = s.list_page(10, 0).await.unwrap();
  assert_eq!(first.len(), 10);
  assert_eq!(first[0].purpose, "p22");

  let third = s.list_page(10, 20).await.unwrap();
  assert_eq!(third.len(), 3);
  assert_eq!(third[2].purpose, "p0");

  assert!(s.list_page(10, 30).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_counts_zero() {
  let s = store().await;
  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.list_recent(10).await.unwrap().is_empty());
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_respect_ownership() {
  let s = store().await;
  let id = s.create(candle(1, "original")).await.unwrap().id;

  let mut tasks = Vec::new();
  for i in 0..20_i64 {
    let s = s.clone();
    let owner = if i % 2 == 0 { 1 } else { 2 };
    tasks.push(tokio::spawn(async move {
      let purpose = format!("from-{owner}-{i}");
      let changed = s.update_purpose(id, owner, purpose).await.unwrap();
      (owner, changed)
    }));
  }

  for task in tasks {
    let (owner, changed) = task.await.unwrap();
    assert_eq!(changed, owner == 1, "owner {owner} got {changed}");
  }

  let after = s.get(id).await.unwrap().unwrap();
  assert!(after.purpose.starts_with("from-1-"), "{}", after.purpose);
  assert_eq!(after.owner_id, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_and_deletes_keep_count_consistent() {
  let s = store().await;

  let creates: Vec<_> = (0..16)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move { s.create(candle(1, &format!("c{i}"))).await.unwrap().id })
    })
    .collect();
  let mut ids = Vec::new();
  for task in creates {
    ids.push(task.await.unwrap());
  }
  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids.len(), 16, "every create got its own id");

  // Owner and intruder race to delete every candle; each owner delete is
  // issued twice so only one of the pair can win.
  let mut deletes = Vec::new();
  for &id in &ids {
    for owner in [2, 1, 1] {
      let s = s.clone();
      deletes.push(tokio::spawn(async move { (id, owner, s.delete(id, owner).await.unwrap()) }));
    }
  }

  let mut removed = std::collections::HashMap::<i64, usize>::new();
  for task in deletes {
    let (id, owner, deleted) = task.await.unwrap();
    if deleted {
      assert_eq!(owner, 1, "intruder deleted candle {id}");
      *removed.entry(id).or_insert(0) += 1;
    }
  }

  assert!(removed.values().all(|&n| n == 1));
  assert_eq!(removed.len(), ids.len());
  let successful: usize = removed.values().sum();
  assert_eq!(s.count().await.unwrap(), (ids.len() - successful) as u64);
  assert!(s.list_recent(50).await.unwrap().is_empty());
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_candles() {
  let path = std::env::temp_dir().join(format!(
    "vela-store-test-{}-{}.db",
    std::process::id(),
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
  ));

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(candle(5, "kept")).await.unwrap().id
  };

  let reopened = SqliteStore::open(&path).await.unwrap();
  assert_eq!(reopened.get(id).await.unwrap().unwrap().purpose, "kept");

  drop(reopened);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
