//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed nine-digit
//! fraction and a `Z` suffix, so lexical order in SQL equals time order.

use chrono::{DateTime, SecondsFormat, Utc};
use vela_core::candle::Candle;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawCandle::from_row`].
pub const CANDLE_COLUMNS: &str =
  "id, owner_id, owner_name, purpose, created_at, media_url";

/// Raw values read directly from a `candles` row.
pub struct RawCandle {
  pub id:         i64,
  pub owner_id:   i64,
  pub owner_name: String,
  pub purpose:    String,
  pub created_at: String,
  pub media_url:  String,
}

impl RawCandle {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      owner_id:   row.get(1)?,
      owner_name: row.get(2)?,
      purpose:    row.get(3)?,
      created_at: row.get(4)?,
      media_url:  row.get(5)?,
    })
  }

  pub fn into_candle(self) -> Result<Candle> {
    Ok(Candle {
      id:         self.id,
      owner_id:   self.owner_id,
      owner_name: self.owner_name,
      purpose:    self.purpose,
      created_at: decode_dt(&self.created_at)?,
      media_url:  self.media_url,
    })
  }
}
