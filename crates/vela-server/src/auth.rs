//! Bearer-token extractor and standalone verifier.
//!
//! The messaging collaborator authenticates with the shared token from its
//! environment; the server only keeps an argon2 hash of it.

use std::sync::Arc;

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use rand_core::OsRng;
use vela_core::store::CandleStore;

use crate::{AppState, error::Error};

/// The credential accepted by this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub token_hash: String,
}

/// Zero-size marker: present in the handler means the request was authenticated.
pub struct Authenticated;

/// Hash `token` into the PHC string stored as `token_hash` in config.
pub fn hash_token(token: &str) -> Result<String, argon2::password_hash::Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(Argon2::default().hash_password(token.as_bytes(), &salt)?.to_string())
}

/// Verify the `Authorization: Bearer <token>` header.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let token = header_val
    .strip_prefix("Bearer ")
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .ok_or(Error::Unauthorized)?;

  let parsed_hash = PasswordHash::new(&config.token_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(token.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)
}

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
  S: CandleStore + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    // argon2 verification is CPU-bound; run it off the async workers.
    let headers = parts.headers.clone();
    let auth = Arc::clone(&state.auth);
    tokio::task::spawn_blocking(move || verify_auth(&headers, &auth))
      .await
      .map_err(|_| Error::Unauthorized)??;
    Ok(Authenticated)
  }
}
