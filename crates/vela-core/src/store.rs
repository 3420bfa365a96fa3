//! The `CandleStore` trait.
//!
//! Implemented by storage backends (e.g. `vela-store-sqlite`). The dispatcher
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::candle::{Candle, NewCandle};

/// Abstraction over a candle store backend.
///
/// Ownership is enforced by the store itself on mutation: `update_purpose`
/// and `delete` must match id *and* owner in one conditional write, and
/// report only whether a row was touched. A missing record and a record owned
/// by someone else are indistinguishable to the caller.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait CandleStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new candle. `id` and `created_at` are assigned by the store.
  fn create(
    &self,
    input: NewCandle,
  ) -> impl Future<Output = Result<Candle, Self::Error>> + Send + '_;

  /// Replace the purpose of candle `id` if and only if it belongs to
  /// `owner_id`. Returns whether a row was changed.
  fn update_purpose(
    &self,
    id: i64,
    owner_id: i64,
    purpose: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete candle `id` if and only if it belongs to `owner_id`. Returns
  /// whether a row was removed.
  fn delete(
    &self,
    id: i64,
    owner_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a candle by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Candle>, Self::Error>> + Send + '_;

  /// The newest `limit` candles, newest first.
  fn list_recent(
    &self,
    limit: u32,
  ) -> impl Future<Output = Result<Vec<Candle>, Self::Error>> + Send + '_;

  /// Every candle lit by `owner_id`, newest first.
  fn list_by_owner(
    &self,
    owner_id: i64,
  ) -> impl Future<Output = Result<Vec<Candle>, Self::Error>> + Send + '_;

  /// A newest-first window of at most `limit` candles starting at `offset`.
  fn list_page(
    &self,
    limit: u32,
    offset: u32,
  ) -> impl Future<Output = Result<Vec<Candle>, Self::Error>> + Send + '_;

  /// Total number of candles.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
