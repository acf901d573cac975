// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Candidate, Direction};

/// Whether `candidate` lies entirely ahead of `source` in `direction`.
///
/// Touching edges count as ahead, so adjacent tiles remain reachable.
/// Anything overlapping the source along the travel axis is rejected.
#[inline]
pub fn is_ahead(source: &Rect, candidate: &Rect, direction: Direction) -> bool {
    match direction {
        Direction::Right => candidate.x0 >= source.x1,
        Direction::Left => candidate.x1 <= source.x0,
        Direction::Down => candidate.y0 >= source.y1,
        Direction::Up => candidate.y1 <= source.y0,
    }
}

/// Keep the candidates that are ahead of `source`, in their original order.
pub fn filter_by_direction<K>(
    mut candidates: Vec<Candidate<K>>,
    source: &Rect,
    direction: Direction,
) -> Vec<Candidate<K>> {
    candidates.retain(|c| is_ahead(source, &c.rect, direction));
    candidates
}
