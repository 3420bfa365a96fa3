//! HTTP webhook surface for Vela.
//!
//! A messaging collaborator (the piece that actually talks to a chat
//! platform) forwards each user message or button press here and relays the
//! returned [`Reply`](vela_bot::Reply) back to the chat.

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use vela_bot::{Dispatcher, MediaPool};
use vela_core::{page::Paginator, store::CandleStore};

use auth::AuthConfig;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `VELA_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_store_path")]
  pub store_path:    PathBuf,
  /// argon2 PHC hash of the collaborator's bearer token.
  pub token_hash:    String,
  /// Media URLs a new candle picks from.
  pub media_pool:    Vec<String>,
  /// Image attached to the `start` reply.
  #[serde(default)]
  pub welcome_media: Option<String>,
  #[serde(default = "default_page_size")]
  pub page_size:     u32,
  #[serde(default = "default_max_pages")]
  pub max_pages:     u32,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("vela.db") }

fn default_page_size() -> u32 { Paginator::default().page_size() }

fn default_max_pages() -> u32 { Paginator::default().max_pages() }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub dispatcher: Arc<Dispatcher<S>>,
  pub auth:       Arc<AuthConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { dispatcher: Arc::clone(&self.dispatcher), auth: Arc::clone(&self.auth) }
  }
}

impl<S: CandleStore> AppState<S> {
  /// Wire a store into a dispatcher according to `config`.
  pub fn from_config(config: &ServerConfig, store: S) -> vela_core::Result<Self> {
    let media = MediaPool::new(config.media_pool.iter().cloned())?;
    let paginator = Paginator::new(config.page_size, config.max_pages)?;
    let dispatcher = Dispatcher::new(Arc::new(store), media)
      .with_paginator(paginator)
      .with_welcome_media(config.welcome_media.clone());

    Ok(Self {
      dispatcher: Arc::new(dispatcher),
      auth:       Arc::new(AuthConfig { token_hash: config.token_hash.clone() }),
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the webhook server.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CandleStore + 'static,
{
  Router::new()
    .route("/health",    get(handlers::health))
    .route("/commands",  get(handlers::menu).post(handlers::command::<S>))
    .route("/callbacks", post(handlers::callback::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
