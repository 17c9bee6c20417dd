//! Active-index cycling for the reviews carousel.

use serde::Serialize;

/// A carousel over `len` entries.
///
/// Forward and backward moves wrap in both directions. Selecting an entry
/// directly bypasses the wrap arithmetic. An empty carousel stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Advance to the next entry, wrapping from the last to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    /// Go back one entry, wrapping from the first to the last.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
        self.active
    }

    /// Jump straight to `index` (dot indicator or thumbnail click).
    ///
    /// Returns `false` and leaves the index alone when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }
}
