// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gridnav --heading-base-level=0

//! Understory Gridnav: four-direction spatial focus navigation.
//!
//! Remote controls, gamepads and arrow keys only offer four directions, yet
//! the layouts they drive are rarely strict grids. This crate picks the single
//! best element to focus next given:
//!
//! - the currently focused element,
//! - a [`Direction`] (or a raw input event plus a [`KeyTranslator`]),
//! - the focusable candidates, measured through a [`Geometry`] provider.
//!
//! ## Selection
//!
//! Every step runs the same pipeline:
//!
//! 1. **Filter**: keep candidates lying entirely ahead of the source in the
//!    requested direction ([`filter_by_direction`]). Touching edges count.
//! 2. **Edge ranking**: keep the candidates whose trailing edge is nearest
//!    to the source's leading edge ([`rank::closest_parallel`]). Every tie
//!    survives.
//! 3. **Tie-break**: keep the candidates that line up best with the source
//!    on the cross axis ([`rank::filter_overlapping`]). Remaining ties are
//!    re-scored against where focus was *before* the source, so repeated
//!    presses keep travelling in a straight line through wide elements.
//!
//! The first survivor wins. Stages never reorder, so exact ties go to the
//! earliest candidate in the order the caller supplied them.
//!
//! The [`Navigator`] owns the short history used by step 3. History is
//! cleared whenever travel switches between horizontal and vertical.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_gridnav::{Candidate, Direction, Navigator};
//!
//! //  [1] [2]
//! //  [3]
//! let tiles = [
//!     Candidate::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     Candidate::new(2, Rect::new(20.0, 0.0, 30.0, 10.0)),
//!     Candidate::new(3, Rect::new(0.0, 20.0, 10.0, 30.0)),
//! ];
//! let ids = [1_u32, 2, 3];
//!
//! let mut nav = Navigator::new();
//! assert_eq!(nav.find_next(&tiles[..], ids, 1, Direction::Right), Some(2));
//! assert_eq!(nav.find_next(&tiles[..], ids, 1, Direction::Down), Some(3));
//! assert_eq!(nav.find_next(&tiles[..], ids, 1, Direction::Left), None);
//! ```
//!
//! ## Raw input
//!
//! ```rust
//! use hashbrown::HashMap;
//! use kurbo::Rect;
//! use understory_gridnav::Navigator;
//! use understory_gridnav::input::{ArrowKeys, KeyTranslator, key_code};
//!
//! let mut bounds: HashMap<&str, Rect> = HashMap::new();
//! bounds.insert("play", Rect::new(0.0, 0.0, 40.0, 20.0));
//! bounds.insert("stop", Rect::new(50.0, 0.0, 90.0, 20.0));
//!
//! let key = key_code::RIGHT;
//! assert!(ArrowKeys.is_navigable(&key));
//!
//! let mut nav = Navigator::new();
//! let next = nav.find_next_with(&bounds, ["play", "stop"], "play", &key, &ArrowKeys);
//! assert_eq!(next, Some("stop"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for each stage of a navigation step.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod candidate;
mod direction;
mod filter;
mod geometry;
mod history;
pub mod input;
mod navigator;
pub mod rank;

pub use candidate::Candidate;
pub use direction::{Axis, Direction, DirectionEdges, Edge, ParseDirectionError, SizeKey};
pub use filter::{filter_by_direction, is_ahead};
pub use geometry::Geometry;
pub use history::{DEFAULT_MAX_HISTORY, History};
pub use input::KeyTranslator;
pub use navigator::{Navigator, NavigatorConfig, TieBreak};
