//! Offset pagination over the newest-first candle ordering.
//!
//! Only the newest `page_size * max_pages` candles are ever reachable; older
//! ones drop off the end of the listing.

use crate::{Error, Result};

/// Fixed page geometry.
///
/// `page_size * max_pages` always fits in `u32`, so every offset handed to
/// the store does too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
  page_size: u32,
  max_pages: u32,
}

impl Default for Paginator {
  fn default() -> Self { Self { page_size: 10, max_pages: 5 } }
}

/// One resolved page: which page is shown and which rows to fetch for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  /// 1-based, already clamped into `1..=total_pages`.
  pub page:        u32,
  pub total_pages: u32,
  pub limit:       u32,
  pub offset:      u32,
}

impl Paginator {
  pub fn new(page_size: u32, max_pages: u32) -> Result<Self> {
    let valid = page_size > 0
      && max_pages > 0
      && page_size.checked_mul(max_pages).is_some();
    if !valid {
      return Err(Error::InvalidPageGeometry { page_size, max_pages });
    }
    Ok(Self { page_size, max_pages })
  }

  pub fn page_size(&self) -> u32 { self.page_size }

  pub fn max_pages(&self) -> u32 { self.max_pages }

  /// `min(max_pages, ceil(total / page_size))`.
  pub fn total_pages(&self, total: u64) -> u32 {
    let size = u64::from(self.page_size);
    let pages = total.div_ceil(size);
    pages.min(u64::from(self.max_pages)) as u32
  }

  /// Resolve `requested` against `total` records. Returns `None` when there
  /// is nothing to show.
  pub fn window(&self, total: u64, requested: i64) -> Option<PageWindow> {
    let total_pages = self.total_pages(total);
    if total_pages == 0 {
      return None;
    }
    let page = requested.clamp(1, i64::from(total_pages)) as u32;
    Some(PageWindow {
      page,
      total_pages,
      limit: self.page_size,
      offset: (page - 1) * self.page_size,
    })
  }
}

impl PageWindow {
  pub fn previous(&self) -> Option<u32> { (self.page > 1).then(|| self.page - 1) }

  pub fn next(&self) -> Option<u32> {
    (self.page < self.total_pages).then(|| self.page + 1)
  }
}
