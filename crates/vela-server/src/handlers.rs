//! Route handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/health` | Unauthenticated liveness check |
//! | `GET`  | `/commands` | Command menu for platform registration |
//! | `POST` | `/commands` | Body: `{"user_id", "user_name", "text"}` |
//! | `POST` | `/callbacks` | Body: `{"user_id", "user_name", "data"}` |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use vela_bot::{Caller, CommandName, Reply, command::MenuEntry};
use vela_core::store::CandleStore;

use crate::{AppState, auth::Authenticated, error::Error};

/// An inbound chat message, already stripped of platform envelope.
#[derive(Debug, Deserialize)]
pub struct CommandBody {
  pub user_id:   i64,
  pub user_name: String,
  pub text:      String,
}

/// A pressed navigation button.
#[derive(Debug, Deserialize)]
pub struct CallbackBody {
  pub user_id:   i64,
  pub user_name: String,
  pub data:      String,
}

/// `GET /health`
pub async fn health() -> &'static str { "ok" }

/// `GET /commands`
pub async fn menu(_auth: Authenticated) -> Json<Vec<MenuEntry>> { Json(CommandName::menu()) }

/// `POST /commands`
pub async fn command<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  body: Result<Json<CommandBody>, JsonRejection>,
) -> Result<Json<Reply>, Error>
where
  S: CandleStore + 'static,
{
  let Json(body) = body.map_err(|e| Error::BadRequest(e.body_text()))?;
  let caller = Caller::new(body.user_id, body.user_name);
  Ok(Json(state.dispatcher.handle_text(&caller, &body.text).await))
}

/// `POST /callbacks`
pub async fn callback<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  body: Result<Json<CallbackBody>, JsonRejection>,
) -> Result<Json<Reply>, Error>
where
  S: CandleStore + 'static,
{
  let Json(body) = body.map_err(|e| Error::BadRequest(e.body_text()))?;
  let caller = Caller::new(body.user_id, body.user_name);
  Ok(Json(state.dispatcher.handle_callback(&caller, &body.data).await))
}
