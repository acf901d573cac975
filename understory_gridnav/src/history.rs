// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use smallvec::SmallVec;

/// Default capacity passed to [`History::new`].
pub const DEFAULT_MAX_HISTORY: usize = 5;

/// Bounded, most-recent-first record of previous source positions.
///
/// Only rect snapshots are kept, never live element handles. Recording evicts
/// from the back while the length is at least `max_history`, so at most
/// `max_history - 1` entries are ever stored.
#[derive(Clone, Debug)]
pub struct History {
    entries: SmallVec<[Rect; DEFAULT_MAX_HISTORY]>,
    max_history: usize,
}

impl History {
    /// Create an empty history with the given capacity.
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: SmallVec::new(),
            max_history,
        }
    }

    /// The configured capacity.
    #[inline]
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Push `rect` as the most recent entry and evict the oldest ones.
    pub fn record(&mut self, rect: Rect) {
        self.entries.insert(0, rect);
        self.entries.truncate(self.max_history.saturating_sub(1));
    }

    /// Forget every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    #[inline]
    pub fn as_slice(&self) -> &[Rect] {
        &self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
