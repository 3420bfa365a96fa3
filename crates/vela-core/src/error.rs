//! Error types for `vela-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("purpose must not be empty")]
  EmptyPurpose,

  #[error("invalid page geometry: {page_size} per page, {max_pages} pages")]
  InvalidPageGeometry { page_size: u32, max_pages: u32 },

  #[error("media pool must contain at least one url")]
  EmptyMediaPool,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
