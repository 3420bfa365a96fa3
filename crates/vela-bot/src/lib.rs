//! Chat-command layer for Vela.
//!
//! Turns a user's message text into a [`Command`], runs it against any
//! [`vela_core::store::CandleStore`] and renders a platform-neutral
//! [`Reply`]. Delivering the reply to a messaging platform is the caller's
//! job.

pub mod command;
pub mod dispatch;
pub mod error;
pub mod media;
pub mod render;
pub mod reply;

pub use command::{Command, CommandName};
pub use dispatch::{Caller, Dispatcher};
pub use error::{CommandError, DispatchError};
pub use media::MediaPool;
pub use reply::{Button, Reply};
