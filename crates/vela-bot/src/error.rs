//! Error types for `vela-bot`.
//!
//! None of these ever reach the user verbatim; [`crate::render::error`] maps
//! each to a fixed message.

use thiserror::Error;

use crate::command::CommandName;

/// The message could not be turned into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
  #[error("empty message")]
  Empty,

  #[error("unknown command: {0:?}")]
  Unknown(String),

  #[error("{0} needs a purpose")]
  MissingPurpose(CommandName),

  #[error("{0} needs a candle id")]
  MissingId(CommandName),

  #[error("not a candle id: {0:?}")]
  InvalidId(String),

  #[error("not a page number: {0:?}")]
  InvalidPage(String),

  #[error("unrecognised callback data: {0:?}")]
  InvalidCallback(String),
}

/// A command that parsed but could not be carried out.
#[derive(Debug, Error)]
pub enum DispatchError {
  #[error(transparent)]
  Command(#[from] CommandError),

  #[error("candle {0} not found")]
  NotFound(i64),

  /// The conditional write touched no row. Whether the candle is missing or
  /// belongs to someone else is unknown, and stays that way.
  #[error("candle {id} not found or not owned by caller")]
  NotFoundOrNotYours { command: CommandName, id: i64 },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}
