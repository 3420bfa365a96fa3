//! Core types and trait definitions for the Vela candle store.
//!
//! This crate has no HTTP or database dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod candle;
pub mod error;
pub mod page;
pub mod store;

pub use error::{Error, Result};
