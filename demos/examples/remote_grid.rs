// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remote-control navigation over a TV-style home screen.
//!
//! The layout mixes a full-width banner, a row of small tiles and a row of
//! wide tiles, so a plain grid model would not fit. A scripted sequence of
//! arrow key codes is fed through `ArrowKeys` and every focus move is printed.
//!
//! Run:
//! - `cargo run -p understory_gridnav_demos --example remote_grid`
//! - `RUST_LOG=understory_gridnav=trace cargo run -p understory_gridnav_demos --example remote_grid`
//!   to see each ranking stage.

use std::collections::HashMap;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_gridnav::Navigator;
use understory_gridnav::input::{ArrowKeys, KeyTranslator, key_code};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The screen, in paint order.
fn home_screen() -> Vec<(&'static str, Rect)> {
    let mut screen = vec![("banner", Rect::new(0.0, 0.0, 300.0, 80.0))];
    for (i, name) in ["news", "music", "movies", "games"].into_iter().enumerate() {
        let x = 80.0 * i as f64;
        screen.push((name, Rect::new(x, 100.0, x + 70.0, 160.0)));
    }
    screen.push(("continue", Rect::new(0.0, 180.0, 145.0, 240.0)));
    screen.push(("settings", Rect::new(155.0, 180.0, 300.0, 240.0)));
    screen
}

fn main() {
    init_tracing();

    let screen = home_screen();
    let order: Vec<&str> = screen.iter().map(|(name, _)| *name).collect();
    // Any `Fn(&K) -> Option<Rect>` closure is a geometry provider.
    let bounds: HashMap<&str, Rect> = screen.iter().copied().collect();
    let geometry = |id: &&str| bounds.get(*id).copied();

    let script = [
        key_code::RIGHT,
        key_code::RIGHT,
        key_code::UP,
        key_code::DOWN,
        key_code::DOWN,
        key_code::RIGHT,
        key_code::UP,
        13, // enter: ignored
        key_code::LEFT,
    ];

    let mut nav = Navigator::new();
    let mut focused = "news";
    println!("focus starts on {focused}");

    for key in script {
        let Some(direction) = ArrowKeys.translate(&key) else {
            println!("key {key:>2}: not a navigation key");
            continue;
        };
        match nav.find_next(&geometry, order.iter().copied(), focused, direction) {
            Some(next) => {
                println!("key {key:>2} ({direction:>5}): {focused} -> {next}");
                focused = next;
            }
            None => println!("key {key:>2} ({direction:>5}): {focused} stays"),
        }
    }
}
