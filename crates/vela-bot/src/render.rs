//! Message text for every reply the bot sends.

use std::fmt::Write as _;

use strum::IntoEnumIterator;
use vela_core::{candle::Candle, page::PageWindow};

use crate::{
  command::{CommandName, page_callback},
  error::{CommandError, DispatchError},
  reply::Reply,
};

const DATE_TIME: &str = "%d/%m/%Y %H:%M";
const DATE: &str = "%d/%m/%Y";

// ─── Help ────────────────────────────────────────────────────────────────────

pub fn welcome(media: Option<&str>) -> Reply {
  let mut text = String::from(
    "Hello! ✨ You can light a candle for any intention.\n\nCommands:\n",
  );
  for name in CommandName::iter() {
    let usage = name.usage();
    let sep = if usage.is_empty() { "" } else { " " };
    let _ = writeln!(text, "/{name}{sep}{usage} - {}.", name.description());
  }
  let reply = Reply::text(text.trim_end());
  match media {
    Some(url) => reply.with_media(url),
    None => reply,
  }
}

// ─── Candles ─────────────────────────────────────────────────────────────────

pub fn created(candle: &Candle) -> Reply {
  Reply::text(format!("From: {}\n\n> {}", candle.owner_name, candle.purpose))
    .with_media(&candle.media_url)
}

pub fn detail(candle: &Candle) -> Reply {
  Reply::text(format!(
    "Candle ID: {}\nLit by: {}\nOn: {}\n\n> {}",
    candle.id,
    candle.owner_name,
    candle.created_at.format(DATE_TIME),
    candle.purpose,
  ))
  .with_media(&candle.media_url)
}

/// One page of the recent listing, with previous/next buttons as needed.
pub fn recent_page(candles: &[Candle], window: &PageWindow) -> Reply {
  let mut text = format!(
    "🕯️ Recently lit candles (page {}/{}):\n\n",
    window.page, window.total_pages
  );
  for c in candles {
    let _ = write!(text, "ID: {:<3} - From: {}\n> {}\n\n", c.id, c.owner_name, c.purpose);
  }

  let mut reply = Reply::text(text.trim_end());
  if let Some(prev) = window.previous() {
    reply = reply.with_button("⬅️ Previous", page_callback(prev));
  }
  if let Some(next) = window.next() {
    reply = reply.with_button("Next ➡️", page_callback(next));
  }
  reply
}

pub fn nothing_yet() -> Reply {
  Reply::text("No candles are lit right now. Use /create to light the first one! 🔥")
}

pub fn mine(candles: &[Candle]) -> Reply {
  if candles.is_empty() {
    return Reply::text(
      "You haven't lit any candles yet. Use /create to light your first one! 🔥",
    );
  }
  let mut text = String::from("🕯️ Your candles:\n\n");
  for c in candles {
    let _ = write!(
      text,
      "ID: {:<3} ({})\n> {}\n\n",
      c.id,
      c.created_at.format(DATE),
      c.purpose
    );
  }
  Reply::text(text.trim_end())
}

pub fn edited(id: i64, purpose: &str) -> Reply {
  Reply::text(format!("Candle ID {id} updated!\n\n> {purpose}"))
}

pub fn deleted(id: i64) -> Reply { Reply::text(format!("Candle ID {id} deleted.")) }

// ─── Failures ────────────────────────────────────────────────────────────────

/// The user-facing message for a failed command. Store errors collapse into
/// one generic line; their detail only goes to the log.
pub fn error(err: &DispatchError) -> Reply {
  let text = match err {
    DispatchError::Command(e) => command_error(e),
    DispatchError::NotFound(id) => format!("Could not find a candle with ID {id}."),
    DispatchError::NotFoundOrNotYours { command, id } => format!(
      "Could not {command} candle ID {id}. Check that the ID is correct and that \
       the candle belongs to you."
    ),
    DispatchError::Store(_) => {
      "Something went wrong on our side. Please try again later.".to_owned()
    }
  };
  Reply::text(text)
}

fn command_error(err: &CommandError) -> String {
  match err {
    CommandError::Empty | CommandError::Unknown(_) => {
      "I don't know that command. Send /start to see what I can do.".to_owned()
    }
    CommandError::MissingPurpose(CommandName::Edit) => {
      "Please give the ID and the new purpose. Example: /edit 5 to pass the exam".to_owned()
    }
    CommandError::MissingPurpose(name) => {
      format!("Please write a purpose after the command. Example: /{name} for world peace")
    }
    CommandError::MissingId(name) => {
      format!("Please give the candle ID. Example: /{name} 5")
    }
    CommandError::InvalidId(_) => "The ID must be a number.".to_owned(),
    CommandError::InvalidPage(_) => "The page must be a number.".to_owned(),
    CommandError::InvalidCallback(_) => {
      "That button has expired. Send /list-recent to start over.".to_owned()
    }
  }
}
