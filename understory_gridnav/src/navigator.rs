// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::filter::filter_by_direction;
use crate::history::{DEFAULT_MAX_HISTORY, History};
use crate::input::KeyTranslator;
use crate::rank::{closest_center, closest_parallel, filter_overlapping};
use crate::{Axis, Candidate, Direction, Geometry};

/// How candidates tied on travel distance are separated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Cross-axis overlap with the source, then with previous positions.
    #[default]
    Overlap,
    /// Nearest cross-axis center. History is recorded but not consulted.
    CenterDistance,
}

/// Construction-time settings for a [`Navigator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// History capacity; at most `max_history - 1` positions are remembered.
    pub max_history: usize,
    /// Tie-break stage run after edge ranking.
    pub tie_break: TieBreak,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            tie_break: TieBreak::Overlap,
        }
    }
}

/// Stateful four-direction focus navigator.
///
/// One navigator serves one navigation context (a page, a panel, a grid).
/// It remembers where focus was on previous steps along the current axis so
/// that repeated presses keep travelling in a visually consistent line.
/// Calls must be serialized; each call completes before the next begins.
#[derive(Clone, Debug)]
pub struct Navigator {
    history: History,
    last_axis: Option<Axis>,
    last_direction: Option<Direction>,
    tie_break: TieBreak,
}

impl Navigator {
    /// Create a navigator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    /// Create a navigator with a custom configuration.
    pub fn with_config(config: NavigatorConfig) -> Self {
        Self {
            history: History::new(config.max_history),
            last_axis: None,
            last_direction: None,
            tie_break: config.tie_break,
        }
    }

    /// Previous source positions on the current axis, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Axis of the last completed step.
    pub fn last_axis(&self) -> Option<Axis> {
        self.last_axis
    }

    /// Direction of the last completed step.
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// The configured tie-break strategy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Forget history and the last axis, as if freshly constructed.
    ///
    /// Call this when focus moves by other means (pointer, Tab, programmatic).
    pub fn reset(&mut self) {
        self.history.reset();
        self.last_axis = None;
        self.last_direction = None;
    }

    /// Pick the element that should receive focus after moving `direction`
    /// from `current`.
    ///
    /// `candidates` may contain `current` and duplicates; both are dropped.
    /// Elements `geometry` cannot measure are skipped. Returns `None` when
    /// nothing lies in that direction or `current` cannot be measured.
    ///
    /// Switching between horizontal and vertical travel clears history
    /// before ranking. The source position is recorded whenever it could be
    /// measured, whether or not a target was found.
    pub fn find_next<K, G, I>(
        &mut self,
        geometry: &G,
        candidates: I,
        current: K,
        direction: Direction,
    ) -> Option<K>
    where
        K: Copy + Eq + Hash,
        G: Geometry<K> + ?Sized,
        I: IntoIterator<Item = K>,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("gridnav_find_next", %direction).entered();

        let axis = direction.axis();
        if self.last_axis != Some(axis) {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = ?self.last_axis, to = ?axis, "axis changed, clearing history");
            self.history.reset();
        }
        self.last_axis = Some(axis);
        self.last_direction = Some(direction);

        let Some(source) = geometry.measure(&current) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("current element has no bounds");
            return None;
        };

        let mut seen = HashSet::new();
        let snapshots: Vec<_> = candidates
            .into_iter()
            .filter(|id| *id != current && seen.insert(*id))
            .filter_map(|id| geometry.measure(&id).map(|rect| Candidate::new(id, rect)))
            .collect();

        let ahead = filter_by_direction(snapshots, &source, direction);
        #[cfg(feature = "tracing")]
        tracing::trace!(count = ahead.len(), "candidates ahead");

        let winner = if ahead.is_empty() {
            None
        } else {
            let edges = direction.edges();
            let mut ranked = closest_parallel(ahead, &source, edges);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                count = ranked.len(),
                distance = ranked.first().map(|c| c.main_edge_distance),
                "closest along travel axis"
            );
            if ranked.len() > 1 {
                ranked = match self.tie_break {
                    TieBreak::Overlap => {
                        filter_overlapping(&ranked, &source, self.history.as_slice(), edges)
                    }
                    TieBreak::CenterDistance => closest_center(&ranked, &source, edges),
                };
                #[cfg(feature = "tracing")]
                tracing::trace!(count = ranked.len(), "after tie-break");
            }
            ranked.first().map(|c| c.candidate.id)
        };

        self.history.record(source);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            found = winner.is_some(),
            history = self.history.len(),
            "navigation step"
        );

        winner
    }

    /// Like [`find_next`](Self::find_next), resolving the direction from a
    /// raw input event.
    ///
    /// Events the translator does not recognize return `None` and leave the
    /// navigator untouched.
    pub fn find_next_with<K, G, I, E, T>(
        &mut self,
        geometry: &G,
        candidates: I,
        current: K,
        event: &E,
        translator: &T,
    ) -> Option<K>
    where
        K: Copy + Eq + Hash,
        G: Geometry<K> + ?Sized,
        I: IntoIterator<Item = K>,
        E: ?Sized,
        T: KeyTranslator<E> + ?Sized,
    {
        let Some(direction) = translator.translate(event) else {
            #[cfg(feature = "tracing")]
            tracing::trace!("input is not a navigation direction");
            return None;
        };
        self.find_next(geometry, candidates, current, direction)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ArrowKeys, DirectionNames, key_code};
    use alloc::vec;
    use kurbo::Rect;

    fn tiles(list: &[(u32, Rect)]) -> Vec<Candidate<u32>> {
        list.iter()
            .map(|&(id, rect)| Candidate::new(id, rect))
            .collect()
    }

    fn ids(space: &[Candidate<u32>]) -> Vec<u32> {
        space.iter().map(|c| c.id).collect()
    }

    #[test]
    fn single_aligned_candidate_is_selected() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], ids(&space), 1, Direction::Right),
            Some(2)
        );
    }

    #[test]
    fn greater_overlap_wins_at_equal_distance() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 6.0, 30.0, 16.0)),
            (3, Rect::new(20.0, -2.0, 30.0, 8.0)),
        ]);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], ids(&space), 1, Direction::Right),
            Some(3)
        );
    }

    #[test]
    fn nothing_ahead_returns_none() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(-30.0, 0.0, -20.0, 10.0)),
            (3, Rect::new(-30.0, 20.0, -20.0, 30.0)),
        ]);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], ids(&space), 1, Direction::Right),
            None
        );
        // The step still counts towards history.
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn only_current_in_candidates_returns_none() {
        let space = tiles(&[(1, Rect::new(0.0, 0.0, 10.0, 10.0))]);
        let mut nav = Navigator::new();
        for d in Direction::ALL {
            assert_eq!(nav.find_next(&space[..], [1_u32, 1], 1, d), None);
        }
    }

    #[test]
    fn axis_change_resets_history() {
        // A row of three with something above the middle one.
        let space = tiles(&[
            (1, Rect::new(0.0, 20.0, 10.0, 30.0)),
            (2, Rect::new(20.0, 20.0, 30.0, 30.0)),
            (3, Rect::new(40.0, 20.0, 50.0, 30.0)),
            (4, Rect::new(40.0, 0.0, 50.0, 10.0)),
        ]);
        let all = ids(&space);
        let mut nav = Navigator::new();

        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 1, Direction::Right),
            Some(2)
        );
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 2, Direction::Right),
            Some(3)
        );
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.last_axis(), Some(Axis::Horizontal));

        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 3, Direction::Up),
            Some(4)
        );
        // Cleared before ranking, then the `Up` source was recorded.
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.history().as_slice()[0], space[2].rect);
        assert_eq!(nav.last_direction(), Some(Direction::Up));
    }

    #[test]
    fn stale_horizontal_history_does_not_steer_vertical_ranking() {
        //  [    4    ][    5    ]
        //       [   3   ][2][1]
        let space = tiles(&[
            (1, Rect::new(140.0, 50.0, 170.0, 60.0)),
            (2, Rect::new(110.0, 50.0, 130.0, 60.0)),
            (3, Rect::new(0.0, 50.0, 100.0, 60.0)),
            (4, Rect::new(-50.0, 30.0, 50.0, 40.0)),
            (5, Rect::new(50.0, 30.0, 150.0, 40.0)),
        ]);
        let all = ids(&space);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 1, Direction::Left),
            Some(2)
        );
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 2, Direction::Left),
            Some(3)
        );
        assert_eq!(nav.history().len(), 2);

        // 4 and 5 tie against 3. Tile 2's position overlaps only 5, so a
        // history that survived the axis change would pick 5.
        let up = Direction::Up.edges();
        let ranked = closest_parallel(
            filter_by_direction(space.clone(), &space[2].rect, Direction::Up),
            &space[2].rect,
            up,
        );
        let stale = filter_overlapping(&ranked, &space[2].rect, nav.history().as_slice(), up);
        assert_eq!(stale[0].candidate.id, 5);

        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 3, Direction::Up),
            Some(4)
        );
    }

    #[test]
    fn reversing_on_the_same_axis_keeps_history() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        nav.find_next(&space[..], ids(&space), 1, Direction::Right);
        nav.find_next(&space[..], ids(&space), 2, Direction::Left);
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn history_bound_holds_over_many_steps() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        let mut at = 1;
        for i in 0..20 {
            let d = if i % 2 == 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            if let Some(next) = nav.find_next(&space[..], ids(&space), at, d) {
                at = next;
            }
            assert!(nav.history().len() < DEFAULT_MAX_HISTORY);
        }
        assert_eq!(nav.history().len(), DEFAULT_MAX_HISTORY - 1);
    }

    #[test]
    fn history_keeps_column_when_crossing_wide_element() {
        //  [a1]      [a2]
        //  [   banner    ]
        //  [b1]      [b2]
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 40.0, 10.0)),
            (2, Rect::new(60.0, 0.0, 100.0, 10.0)),
            (3, Rect::new(0.0, 20.0, 100.0, 30.0)),
            (4, Rect::new(0.0, 40.0, 40.0, 50.0)),
            (5, Rect::new(60.0, 40.0, 100.0, 50.0)),
        ]);
        let all = ids(&space);

        // Starting from the right column we come back out on the right.
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 2, Direction::Down),
            Some(3)
        );
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 3, Direction::Down),
            Some(5)
        );

        // Starting from the left column we come back out on the left.
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 1, Direction::Down),
            Some(3)
        );
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 3, Direction::Down),
            Some(4)
        );

        // Without history the first candidate in input order wins.
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], all.iter().copied(), 3, Direction::Down),
            Some(4)
        );
    }

    #[test]
    fn center_distance_ignores_history() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, -9.0, 30.0, 1.0)),
            (3, Rect::new(20.0, 4.0, 30.0, 14.0)),
        ]);
        let mut nav = Navigator::with_config(NavigatorConfig {
            tie_break: TieBreak::CenterDistance,
            ..NavigatorConfig::default()
        });
        assert_eq!(nav.tie_break(), TieBreak::CenterDistance);
        // Center offsets are 9 and 4.
        assert_eq!(
            nav.find_next(&space[..], ids(&space), 1, Direction::Right),
            Some(3)
        );
    }

    #[test]
    fn duplicates_are_collapsed_to_first_occurrence() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
            (3, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next(&space[..], [3_u32, 2, 3, 1, 2], 1, Direction::Right),
            Some(3)
        );
    }

    #[test]
    fn unmeasurable_elements() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 30.0, 10.0);
        let geometry = |id: &u32| match id {
            1 => Some(a),
            2 => Some(b),
            _ => None,
        };
        let mut nav = Navigator::new();
        // Unknown candidate 9 is skipped.
        assert_eq!(
            nav.find_next(&geometry, [9_u32, 2], 1, Direction::Right),
            Some(2)
        );
        // Unknown source finds nothing and records nothing.
        nav.reset();
        assert_eq!(
            nav.find_next(&geometry, [1_u32, 2], 9, Direction::Right),
            None
        );
        assert!(nav.history().is_empty());
    }

    #[test]
    fn translators_resolve_directions() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(0.0, 20.0, 10.0, 30.0)),
        ]);
        let mut nav = Navigator::new();
        assert_eq!(
            nav.find_next_with(&space[..], ids(&space), 1, &key_code::DOWN, &ArrowKeys),
            Some(2)
        );
        assert_eq!(
            nav.find_next_with(&space[..], ids(&space), 2, "up", &DirectionNames),
            Some(1)
        );
    }

    #[test]
    fn unknown_input_leaves_state_untouched() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        nav.find_next(&space[..], ids(&space), 1, Direction::Right);
        let enter = 13_u32;
        assert_eq!(
            nav.find_next_with(&space[..], ids(&space), 2, &enter, &ArrowKeys),
            None
        );
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.last_direction(), Some(Direction::Right));
    }

    #[test]
    fn reset_forgets_everything() {
        let space = tiles(&[
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ]);
        let mut nav = Navigator::new();
        nav.find_next(&space[..], vec![1_u32, 2], 1, Direction::Right);
        nav.reset();
        assert!(nav.history().is_empty());
        assert_eq!(nav.last_axis(), None);
        assert_eq!(nav.last_direction(), None);
    }
}
