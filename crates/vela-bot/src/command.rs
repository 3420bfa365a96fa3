//! Command names and argument parsing.
//!
//! A message is `<name> <args...>`, with or without a leading `/`. Every
//! command answers to an English name and to a Portuguese alias
//! (`/vela`, `/listar`, ...), case-insensitively.

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use vela_core::candle::normalize_purpose;

use crate::error::CommandError;

/// Prefix of the opaque data carried by pagination buttons.
pub const PAGE_CALLBACK_PREFIX: &str = "page:";

// ─── Names ───────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  strum::Display,
  strum::EnumString,
  EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CommandName {
  #[strum(to_string = "start", serialize = "help")]
  Start,
  #[strum(to_string = "create", serialize = "vela")]
  Create,
  #[strum(to_string = "list-recent", serialize = "listar")]
  ListRecent,
  #[strum(to_string = "list-mine", serialize = "minhasvelas")]
  ListMine,
  #[strum(to_string = "view", serialize = "ver")]
  View,
  #[strum(to_string = "edit", serialize = "editar")]
  Edit,
  #[strum(to_string = "delete", serialize = "excluir")]
  Delete,
}

impl CommandName {
  /// Argument synopsis shown in the help text.
  pub fn usage(self) -> &'static str {
    match self {
      Self::Start => "",
      Self::Create => "<purpose>",
      Self::ListRecent => "[page]",
      Self::ListMine => "",
      Self::View | Self::Delete => "<id>",
      Self::Edit => "<id> <new purpose>",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Self::Start => "Show this help",
      Self::Create => "Light a new candle",
      Self::ListRecent => "Show the most recently lit candles",
      Self::ListMine => "Show every candle you have lit",
      Self::View => "Show the details of a candle",
      Self::Edit => "Change the purpose of one of your candles",
      Self::Delete => "Put out one of your candles",
    }
  }

  /// The menu a messaging collaborator registers with its platform.
  pub fn menu() -> Vec<MenuEntry> {
    Self::iter()
      .map(|name| MenuEntry {
        command:     name.to_string(),
        usage:       name.usage(),
        description: name.description(),
      })
      .collect()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
  pub command:     String,
  pub usage:       &'static str,
  pub description: &'static str,
}

// ─── Commands ────────────────────────────────────────────────────────────────

/// A fully validated command, ready to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Start,
  Create { purpose: String },
  /// `page` is the raw request; clamping happens against the live count.
  ListRecent { page: i64 },
  ListMine,
  View { id: i64 },
  Edit { id: i64, purpose: String },
  Delete { id: i64 },
}

impl Command {
  pub fn name(&self) -> CommandName {
    match self {
      Self::Start => CommandName::Start,
      Self::Create { .. } => CommandName::Create,
      Self::ListRecent { .. } => CommandName::ListRecent,
      Self::ListMine => CommandName::ListMine,
      Self::View { .. } => CommandName::View,
      Self::Edit { .. } => CommandName::Edit,
      Self::Delete { .. } => CommandName::Delete,
    }
  }

  /// Parse a chat message.
  pub fn parse(text: &str) -> Result<Self, CommandError> {
    let text = text.trim();
    if text.is_empty() {
      return Err(CommandError::Empty);
    }

    let (head, rest) = split_word(text);
    let head = head.strip_prefix('/').unwrap_or(head);
    let name = head
      .parse::<CommandName>()
      .map_err(|_| CommandError::Unknown(head.to_owned()))?;

    match name {
      CommandName::Start => Ok(Self::Start),
      CommandName::ListMine => Ok(Self::ListMine),
      CommandName::Create => Ok(Self::Create { purpose: purpose(name, rest)? }),
      CommandName::ListRecent => {
        let (arg, _) = split_word(rest);
        if arg.is_empty() {
          return Ok(Self::ListRecent { page: 1 });
        }
        let page = parse_page(arg).ok_or_else(|| CommandError::InvalidPage(arg.to_owned()))?;
        Ok(Self::ListRecent { page })
      }
      CommandName::View => Ok(Self::View { id: id(name, rest)?.0 }),
      CommandName::Delete => Ok(Self::Delete { id: id(name, rest)?.0 }),
      CommandName::Edit => {
        let (id, rest) = id(name, rest)?;
        Ok(Self::Edit { id, purpose: purpose(name, rest)? })
      }
    }
  }

  /// Parse the opaque data attached to a pagination button.
  pub fn parse_callback(data: &str) -> Result<Self, CommandError> {
    data
      .strip_prefix(PAGE_CALLBACK_PREFIX)
      .and_then(parse_page)
      .map(|page| Self::ListRecent { page })
      .ok_or_else(|| CommandError::InvalidCallback(data.to_owned()))
  }
}

/// Callback data that re-opens `page` of the recent listing.
pub fn page_callback(page: u32) -> String { format!("{PAGE_CALLBACK_PREFIX}{page}") }

// ─── Argument helpers ────────────────────────────────────────────────────────

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
  let s = s.trim_start();
  match s.split_once(char::is_whitespace) {
    Some((word, rest)) => (word, rest.trim()),
    None => (s, ""),
  }
}

/// A signed decimal page number. Values beyond `i64` saturate, since any
/// numeric page is clamped later anyway.
fn parse_page(word: &str) -> Option<i64> {
  let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  match word.parse::<i64>() {
    Ok(page) => Some(page),
    Err(_) if word.starts_with('-') => Some(i64::MIN),
    Err(_) => Some(i64::MAX),
  }
}

fn id(name: CommandName, rest: &str) -> Result<(i64, &str), CommandError> {
  let (word, rest) = split_word(rest);
  if word.is_empty() {
    return Err(CommandError::MissingId(name));
  }
  let id = word
    .parse()
    .map_err(|_| CommandError::InvalidId(word.to_owned()))?;
  Ok((id, rest))
}

fn purpose(name: CommandName, rest: &str) -> Result<String, CommandError> {
  normalize_purpose(rest).map_err(|_| CommandError::MissingPurpose(name))
}
