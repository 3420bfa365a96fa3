//! Candles: the single recorded intention this service stores.
//!
//! A candle belongs to the user who lit it. Only that user may change its
//! purpose or put it out; everything else about it is fixed at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted candle as returned by a [`CandleStore`](crate::store::CandleStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
  /// Store-assigned, monotonically increasing.
  pub id:         i64,
  pub owner_id:   i64,
  /// Display name of the owner at the time the candle was lit.
  pub owner_name: String,
  pub purpose:    String,
  /// Server-assigned at insert time.
  pub created_at: DateTime<Utc>,
  pub media_url:  String,
}

/// Input for [`CandleStore::create`](crate::store::CandleStore::create).
///
/// Carries no `id` or `created_at`; the store assigns both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandle {
  pub owner_id:   i64,
  pub owner_name: String,
  pub purpose:    String,
  pub media_url:  String,
}

impl NewCandle {
  /// Build a new candle, normalising and validating the purpose.
  pub fn new(
    owner_id: i64,
    owner_name: impl Into<String>,
    purpose: &str,
    media_url: impl Into<String>,
  ) -> Result<Self> {
    Ok(Self {
      owner_id,
      owner_name: owner_name.into(),
      purpose: normalize_purpose(purpose)?,
      media_url: media_url.into(),
    })
  }
}

/// Trim surrounding whitespace and reject an empty purpose.
pub fn normalize_purpose(raw: &str) -> Result<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(Error::EmptyPurpose);
  }
  Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_candle_trims_purpose() {
    let c = NewCandle::new(7, "Ana", "  for peace \n", "https://x/1.gif").unwrap();
    assert_eq!(c.purpose, "for peace");
    assert_eq!(c.owner_name, "Ana");
  }

  #[test]
  fn blank_purpose_is_rejected() {
    assert!(matches!(
      NewCandle::new(7, "Ana", "   ", "https://x/1.gif"),
      Err(Error::EmptyPurpose)
    ));
    assert!(matches!(normalize_purpose(""), Err(Error::EmptyPurpose)));
  }
}
