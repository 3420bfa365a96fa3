//! Platform-neutral outbound message.

use serde::{Deserialize, Serialize};

/// What the bot says back: text, an optional media attachment, and any
/// navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
  pub text:    String,
  pub media:   Option<String>,
  #[serde(default)]
  pub buttons: Vec<Button>,
}

/// An inline button. Pressing it sends `data` back as a callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
  pub label: String,
  pub data:  String,
}

impl Reply {
  pub fn text(text: impl Into<String>) -> Self {
    Self { text: text.into(), media: None, buttons: Vec::new() }
  }

  pub fn with_media(mut self, url: impl Into<String>) -> Self {
    self.media = Some(url.into());
    self
  }

  pub fn with_button(mut self, label: impl Into<String>, data: impl Into<String>) -> Self {
    self.buttons.push(Button { label: label.into(), data: data.into() });
    self
  }
}
