// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directions, axes, and the static edge table used by every ranking stage.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::Rect;

/// One of the four cardinal navigation intents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move towards smaller x.
    Left,
    /// Move towards larger x.
    Right,
    /// Move towards smaller y.
    Up,
    /// Move towards larger y.
    Down,
}

impl Direction {
    /// All four directions, in `Left`, `Right`, `Up`, `Down` order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The axis this direction travels along.
    ///
    /// `Up` and `Down` are vertical; everything else is horizontal.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Edge and size keys consulted when ranking candidates in this direction.
    #[inline]
    pub const fn edges(self) -> DirectionEdges {
        match self {
            Self::Right => DirectionEdges {
                leading: Edge::Right,
                trailing: Edge::Left,
                cross_lower: Edge::Top,
                cross_upper: Edge::Bottom,
                cross_size: SizeKey::Height,
            },
            Self::Left => DirectionEdges {
                leading: Edge::Left,
                trailing: Edge::Right,
                cross_lower: Edge::Top,
                cross_upper: Edge::Bottom,
                cross_size: SizeKey::Height,
            },
            Self::Down => DirectionEdges {
                leading: Edge::Bottom,
                trailing: Edge::Top,
                cross_lower: Edge::Left,
                cross_upper: Edge::Right,
                cross_size: SizeKey::Width,
            },
            Self::Up => DirectionEdges {
                leading: Edge::Top,
                trailing: Edge::Bottom,
                cross_lower: Edge::Left,
                cross_upper: Edge::Right,
                cross_size: SizeKey::Width,
            },
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse `"left"`, `"right"`, `"up"` or `"down"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| s.eq_ignore_ascii_case(d.name()))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}

/// Error returned when a string does not name a [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown navigation direction `{input}`")]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Horizontal or vertical grouping of a [`Direction`].
///
/// History is only meaningful while navigation stays on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `Left` / `Right`.
    Horizontal,
    /// `Up` / `Down`.
    Vertical,
}

/// One side of a [`Rect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `x0`.
    Left,
    /// `x1`.
    Right,
    /// `y0`.
    Top,
    /// `y1`.
    Bottom,
}

impl Edge {
    /// Read this edge's coordinate from `rect`.
    #[inline]
    pub fn of(self, rect: &Rect) -> f64 {
        match self {
            Self::Left => rect.x0,
            Self::Right => rect.x1,
            Self::Top => rect.y0,
            Self::Bottom => rect.y1,
        }
    }
}

/// Extent of a [`Rect`] along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeKey {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl SizeKey {
    /// Read this size from `rect`.
    #[inline]
    pub fn of(self, rect: &Rect) -> f64 {
        match self {
            Self::Width => rect.width(),
            Self::Height => rect.height(),
        }
    }
}

/// The edges a direction ranks by.
///
/// `leading` is the source edge facing the direction of travel and
/// `trailing` the candidate edge facing back towards the source. The cross
/// edges and size describe the perpendicular span used for overlap scoring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectionEdges {
    /// Source edge facing the direction of travel.
    pub leading: Edge,
    /// Candidate edge facing the source.
    pub trailing: Edge,
    /// Lower bound of the cross-axis span.
    pub cross_lower: Edge,
    /// Upper bound of the cross-axis span.
    pub cross_upper: Edge,
    /// Cross-axis extent.
    pub cross_size: SizeKey,
}
