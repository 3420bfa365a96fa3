//! The fixed pool of decorative media a new candle is lit with.

use rand::Rng as _;

/// A non-empty set of media URLs.
#[derive(Debug, Clone)]
pub struct MediaPool {
  urls: Vec<String>,
}

impl MediaPool {
  /// Build a pool, ignoring blank entries. Fails if nothing remains.
  pub fn new<I, U>(urls: I) -> vela_core::Result<Self>
  where
    I: IntoIterator<Item = U>,
    U: Into<String>,
  {
    let urls: Vec<String> = urls
      .into_iter()
      .map(Into::into)
      .map(|u| u.trim().to_owned())
      .filter(|u| !u.is_empty())
      .collect();
    if urls.is_empty() {
      return Err(vela_core::Error::EmptyMediaPool);
    }
    Ok(Self { urls })
  }

  /// A uniformly random member, freshly drawn on every call.
  pub fn pick(&self) -> &str {
    let i = rand::rng().random_range(0..self.urls.len());
    &self.urls[i]
  }

  pub fn urls(&self) -> &[String] { &self.urls }

  pub fn contains(&self, url: &str) -> bool { self.urls.iter().any(|u| u == url) }
}
