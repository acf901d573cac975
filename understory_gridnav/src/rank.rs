// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranking stages applied after directional filtering.
//!
//! Each stage narrows its input to the tied-best subset and never reorders
//! it, so the first survivor is always the earliest candidate the caller
//! supplied among the equally good ones.
//!
//! 1. [`closest_parallel`] keeps the candidates nearest along the travel axis
//!    (the next "row" or "column").
//! 2. [`filter_overlapping`] keeps the candidates that line up best with the
//!    source on the cross axis, consulting history to break remaining ties.
//!    [`closest_center`] is an alternative that ignores history and keeps the
//!    candidates whose cross-axis center is nearest to the source's.

use alloc::vec::Vec;

use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{Candidate, DirectionEdges};

/// A candidate decorated with the scores of the current navigation step.
///
/// Scores are recomputed on every step and never carried over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankedCandidate<K> {
    /// The candidate being ranked.
    pub candidate: Candidate<K>,
    /// Rounded gap between the source's leading edge and this candidate's trailing edge.
    pub main_edge_distance: f64,
    /// Percentage (0–100) of this candidate's cross-axis span covered by the reference.
    pub overlap_self_size: f64,
    /// Percentage (0–100) of the reference's cross-axis span covered by this candidate.
    pub overlap_current_size: f64,
}

impl<K> RankedCandidate<K> {
    fn new(candidate: Candidate<K>, main_edge_distance: f64) -> Self {
        Self {
            candidate,
            main_edge_distance,
            overlap_self_size: 0.0,
            overlap_current_size: 0.0,
        }
    }

    fn scored_against(mut self, reference: &Rect, edges: DirectionEdges) -> Self {
        self.overlap_self_size = overlap(reference, &self.candidate.rect, edges);
        self.overlap_current_size = overlap(&self.candidate.rect, reference, edges);
        self
    }
}

/// Percentage (0–100) of `source`'s cross-axis span covered by `target`.
///
/// Both rects are projected onto the cross axis of `edges`. The result is
/// rounded to a whole percentage. A `source` with no cross-axis extent scores
/// `0` rather than dividing by zero.
pub fn overlap(target: &Rect, source: &Rect, edges: DirectionEdges) -> f64 {
    let size = edges.cross_size.of(source);
    if !(size > 0.0 && size.is_finite()) {
        return 0.0;
    }
    let base = edges.cross_lower.of(source);
    let lower = (edges.cross_lower.of(target) - base).clamp(0.0, size);
    let upper = (edges.cross_upper.of(target) - base).clamp(0.0, size);
    ((upper - lower) / size * 100.0).round()
}

/// Score every candidate by travel-axis distance and keep the closest ones.
///
/// All candidates sharing the minimal rounded distance survive.
pub fn closest_parallel<K>(
    candidates: Vec<Candidate<K>>,
    source: &Rect,
    edges: DirectionEdges,
) -> Vec<RankedCandidate<K>> {
    let leading = edges.leading.of(source);
    let mut ranked: Vec<_> = candidates
        .into_iter()
        .map(|c| {
            let dist = (leading - edges.trailing.of(&c.rect)).abs().round();
            RankedCandidate::new(c, dist)
        })
        .collect();
    keep_extreme(&mut ranked, |c| c.main_edge_distance, Extreme::Lowest);
    ranked
}

/// Narrow tied candidates by cross-axis overlap with `reference`.
///
/// Candidates are first ranked by how much of their own span the reference
/// covers. Remaining ties are re-scored against the front of `history` (the
/// position visited just before `reference`), recursing at most
/// `history.len()` times. Survivors are then ranked by how much of the
/// reference they cover.
///
/// Never returns an empty set for a non-empty input: if every candidate is
/// eliminated the input comes back unchanged.
pub fn filter_overlapping<K: Clone>(
    candidates: &[RankedCandidate<K>],
    reference: &Rect,
    history: &[Rect],
    edges: DirectionEdges,
) -> Vec<RankedCandidate<K>> {
    let mut items: Vec<_> = candidates
        .iter()
        .cloned()
        .map(|c| c.scored_against(reference, edges))
        .filter(|c| c.overlap_self_size > 0.0)
        .collect();
    keep_extreme(&mut items, |c| c.overlap_self_size, Extreme::Highest);

    if items.len() > 1
        && let Some((previous, rest)) = history.split_first()
    {
        // Scores from the deeper level replace ours when it narrows.
        items = filter_overlapping(&items, previous, rest, edges);
    }

    items.retain(|c| c.overlap_current_size > 0.0);
    keep_extreme(&mut items, |c| c.overlap_current_size, Extreme::Highest);

    if items.is_empty() {
        candidates.to_vec()
    } else {
        items
    }
}

/// Keep the candidates whose cross-axis center is nearest the source's.
///
/// Offsets are rounded the same way as travel distances.
pub fn closest_center<K: Clone>(
    candidates: &[RankedCandidate<K>],
    source: &Rect,
    edges: DirectionEdges,
) -> Vec<RankedCandidate<K>> {
    let center = |r: &Rect| 0.5 * (edges.cross_lower.of(r) + edges.cross_upper.of(r));
    let origin = center(source);
    let mut items: Vec<_> = candidates
        .iter()
        .map(|c| {
            let offset = center(&c.candidate.rect) - origin;
            (offset.abs().round(), c.clone())
        })
        .collect();
    keep_extreme(&mut items, |(offset, _)| *offset, Extreme::Lowest);
    items.into_iter().map(|(_, c)| c).collect()
}

#[derive(Copy, Clone)]
enum Extreme {
    Lowest,
    Highest,
}

/// Retain every item whose key equals the lowest or highest key present.
///
/// Items with a NaN key never survive.
fn keep_extreme<T>(items: &mut Vec<T>, key: impl Fn(&T) -> f64, extreme: Extreme) {
    let best = items.iter().map(&key).fold(None, |best: Option<f64>, k| {
        let better = match (best, extreme) {
            (None, _) => !k.is_nan(),
            (Some(b), Extreme::Lowest) => k < b,
            (Some(b), Extreme::Highest) => k > b,
        };
        if better { Some(k) } else { best }
    });
    match best {
        Some(best) => items.retain(|item| key(item) == best),
        None => items.clear(),
    }
}
