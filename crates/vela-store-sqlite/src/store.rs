//! [`SqliteStore`], the SQLite implementation of [`CandleStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, types::Value};

use vela_core::{
  candle::{Candle, NewCandle},
  store::CandleStore,
};

use crate::{
  encode::{CANDLE_COLUMNS, RawCandle, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A candle store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every call
/// is serialised onto the connection's own thread, and each mutation is one
/// SQL statement, so concurrent callers never interleave inside a write.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `SELECT <columns> FROM candles <tail>` and decode every row.
  ///
  /// `tail` carries the WHERE/ORDER/LIMIT clauses; `params` bind to its
  /// placeholders in order.
  async fn select(&self, tail: &'static str, params: Vec<Value>) -> Result<Vec<Candle>> {
    let raws: Vec<RawCandle> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {CANDLE_COLUMNS} FROM candles {tail}");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawCandle::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCandle::into_candle).collect()
  }
}

// ─── CandleStore impl ────────────────────────────────────────────────────────

impl CandleStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create(&self, input: NewCandle) -> Result<Candle> {
    let created_at = Utc::now();

    let owner_id   = input.owner_id;
    let owner_name = input.owner_name.clone();
    let purpose    = input.purpose.clone();
    let at_str     = encode_dt(created_at);
    let media_url  = input.media_url.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO candles (owner_id, owner_name, purpose, created_at, media_url)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![owner_id, owner_name, purpose, at_str, media_url],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Candle {
      id,
      owner_id:   input.owner_id,
      owner_name: input.owner_name,
      purpose:    input.purpose,
      created_at,
      media_url:  input.media_url,
    })
  }

  async fn update_purpose(&self, id: i64, owner_id: i64, purpose: String) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE candles SET purpose = ?1 WHERE id = ?2 AND owner_id = ?3",
          rusqlite::params![purpose, id, owner_id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn delete(&self, id: i64, owner_id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM candles WHERE id = ?1 AND owner_id = ?2",
          rusqlite::params![id, owner_id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get(&self, id: i64) -> Result<Option<Candle>> {
    let raw: Option<RawCandle> = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {CANDLE_COLUMNS} FROM candles WHERE id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawCandle::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCandle::into_candle).transpose()
  }

  async fn list_recent(&self, limit: u32) -> Result<Vec<Candle>> {
    self.list_page(limit, 0).await
  }

  async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Candle>> {
    self
      .select(
        "WHERE owner_id = ?1 ORDER BY created_at DESC, id DESC",
        vec![Value::Integer(owner_id)],
      )
      .await
  }

  async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Candle>> {
    self
      .select(
        "ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
        vec![Value::Integer(i64::from(limit)), Value::Integer(i64::from(offset))],
      )
      .await
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM candles", [], |r| r.get(0))?)
      })
      .await?;
    u64::try_from(n).map_err(|_| Error::Count(n))
  }
}
