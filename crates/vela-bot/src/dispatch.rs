//! [`Dispatcher`]: runs commands against a [`CandleStore`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vela_core::{candle::NewCandle, page::Paginator, store::CandleStore};

use crate::{
  command::{Command, CommandName},
  error::{CommandError, DispatchError},
  media::MediaPool,
  render,
  reply::Reply,
};

/// Who sent the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
  pub user_id:      i64,
  pub display_name: String,
}

impl Caller {
  pub fn new(user_id: i64, display_name: impl Into<String>) -> Self {
    Self { user_id, display_name: display_name.into() }
  }
}

/// Maps commands to store operations and renders the outcome.
///
/// Holds no per-request state; one instance serves every user.
pub struct Dispatcher<S> {
  store:         Arc<S>,
  media:         MediaPool,
  paginator:     Paginator,
  welcome_media: Option<String>,
}

impl<S: CandleStore> Dispatcher<S> {
  pub fn new(store: Arc<S>, media: MediaPool) -> Self {
    Self { store, media, paginator: Paginator::default(), welcome_media: None }
  }

  pub fn with_paginator(mut self, paginator: Paginator) -> Self {
    self.paginator = paginator;
    self
  }

  pub fn with_welcome_media(mut self, url: Option<String>) -> Self {
    self.welcome_media = url;
    self
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  /// Handle a chat message. Never fails: every error becomes a reply.
  pub async fn handle_text(&self, caller: &Caller, text: &str) -> Reply {
    match Command::parse(text) {
      Ok(command) => self.dispatch(caller, command).await,
      Err(e) => self.fail(caller, e.into()),
    }
  }

  /// Handle the data of a pressed navigation button.
  pub async fn handle_callback(&self, caller: &Caller, data: &str) -> Reply {
    match Command::parse_callback(data) {
      Ok(command) => self.dispatch(caller, command).await,
      Err(e) => self.fail(caller, e.into()),
    }
  }

  /// Run an already-parsed command.
  pub async fn dispatch(&self, caller: &Caller, command: Command) -> Reply {
    let name = command.name();
    match self.execute(caller, command).await {
      Ok(reply) => reply,
      Err(e) => {
        tracing::debug!(command = %name, "command rejected");
        self.fail(caller, e)
      }
    }
  }

  async fn execute(&self, caller: &Caller, command: Command) -> Result<Reply, DispatchError> {
    match command {
      Command::Start => Ok(render::welcome(self.welcome_media.as_deref())),

      Command::Create { purpose } => {
        let media_url = self.media.pick().to_owned();
        let input = NewCandle::new(caller.user_id, &caller.display_name, &purpose, media_url)
          .map_err(|_| CommandError::MissingPurpose(CommandName::Create))?;
        let candle = self.store.create(input).await.map_err(DispatchError::store)?;
        tracing::info!(candle_id = candle.id, owner_id = candle.owner_id, "candle lit");
        Ok(render::created(&candle))
      }

      Command::ListRecent { page } => {
        let total = self.store.count().await.map_err(DispatchError::store)?;
        let Some(window) = self.paginator.window(total, page) else {
          return Ok(render::nothing_yet());
        };
        let candles = self
          .store
          .list_page(window.limit, window.offset)
          .await
          .map_err(DispatchError::store)?;
        Ok(render::recent_page(&candles, &window))
      }

      Command::ListMine => {
        let candles = self
          .store
          .list_by_owner(caller.user_id)
          .await
          .map_err(DispatchError::store)?;
        Ok(render::mine(&candles))
      }

      Command::View { id } => {
        let candle = self
          .store
          .get(id)
          .await
          .map_err(DispatchError::store)?
          .ok_or(DispatchError::NotFound(id))?;
        Ok(render::detail(&candle))
      }

      Command::Edit { id, purpose } => {
        let changed = self
          .store
          .update_purpose(id, caller.user_id, purpose.clone())
          .await
          .map_err(DispatchError::store)?;
        if !changed {
          return Err(DispatchError::NotFoundOrNotYours { command: CommandName::Edit, id });
        }
        tracing::info!(candle_id = id, owner_id = caller.user_id, "candle purpose changed");
        Ok(render::edited(id, &purpose))
      }

      Command::Delete { id } => {
        let removed = self
          .store
          .delete(id, caller.user_id)
          .await
          .map_err(DispatchError::store)?;
        if !removed {
          return Err(DispatchError::NotFoundOrNotYours { command: CommandName::Delete, id });
        }
        tracing::info!(candle_id = id, owner_id = caller.user_id, "candle put out");
        Ok(render::deleted(id))
      }
    }
  }

  fn fail(&self, caller: &Caller, err: DispatchError) -> Reply {
    if let DispatchError::Store(source) = &err {
      tracing::error!(user_id = caller.user_id, error = %source, "store operation failed");
    }
    render::error(&err)
  }
}
