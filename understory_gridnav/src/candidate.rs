// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// A focusable element paired with a snapshot of its bounds.
///
/// The rect is measured once per navigation step and never re-read; all
/// candidates of one step must share a coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// Identifier of the element.
    pub id: K,
    /// Bounds at the time of the navigation step.
    pub rect: Rect,
}

impl<K> Candidate<K> {
    /// Pair an id with its bounds.
    #[inline]
    pub const fn new(id: K, rect: Rect) -> Self {
        Self { id, rect }
    }
}
