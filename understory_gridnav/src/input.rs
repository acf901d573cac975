// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translating raw input into a [`Direction`].
//!
//! The navigator only understands [`Direction`] values. Hosts that receive
//! key codes, gamepad buttons or textual commands plug a [`KeyTranslator`]
//! in front of it. Two translators ship with the crate:
//!
//! - [`ArrowKeys`] for DOM-style `keyCode` values (`37`–`40`).
//! - [`DirectionNames`] for the strings `"left"`, `"right"`, `"up"`, `"down"`.
//!
//! Any `Fn(&E) -> Option<Direction>` closure is also a translator.

use crate::Direction;

/// DOM-style key codes for the arrow keys.
pub mod key_code {
    /// Left arrow.
    pub const LEFT: u32 = 37;
    /// Up arrow.
    pub const UP: u32 = 38;
    /// Right arrow.
    pub const RIGHT: u32 = 39;
    /// Down arrow.
    pub const DOWN: u32 = 40;
}

/// Whether `code` is one of the four arrow key codes.
#[inline]
pub const fn is_arrow_key(code: u32) -> bool {
    code >= key_code::LEFT && code <= key_code::DOWN
}

/// Maps an input event to a navigation direction.
pub trait KeyTranslator<E: ?Sized> {
    /// The direction `event` asks for, or `None` if it is not a navigation input.
    fn translate(&self, event: &E) -> Option<Direction>;

    /// Whether `event` is worth handing to the navigator at all.
    #[inline]
    fn is_navigable(&self, event: &E) -> bool {
        self.translate(event).is_some()
    }
}

impl<E: ?Sized, F> KeyTranslator<E> for F
where
    F: Fn(&E) -> Option<Direction>,
{
    #[inline]
    fn translate(&self, event: &E) -> Option<Direction> {
        self(event)
    }
}

/// Translator for DOM-style arrow key codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrowKeys;

impl KeyTranslator<u32> for ArrowKeys {
    fn translate(&self, event: &u32) -> Option<Direction> {
        match *event {
            key_code::LEFT => Some(Direction::Left),
            key_code::UP => Some(Direction::Up),
            key_code::RIGHT => Some(Direction::Right),
            key_code::DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    #[inline]
    fn is_navigable(&self, event: &u32) -> bool {
        is_arrow_key(*event)
    }
}

/// Translator for direction names, ignoring ASCII case.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionNames;

impl KeyTranslator<str> for DirectionNames {
    fn translate(&self, event: &str) -> Option<Direction> {
        event.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_cover_exactly_37_to_40() {
        assert!(!is_arrow_key(36));
        assert!(!is_arrow_key(41));
        for code in 37..=40 {
            assert!(is_arrow_key(code));
            assert!(ArrowKeys.translate(&code).is_some());
        }
        assert_eq!(ArrowKeys.translate(&39), Some(Direction::Right));
        assert_eq!(ArrowKeys.translate(&38), Some(Direction::Up));
        assert_eq!(ArrowKeys.translate(&13), None);
        assert!(!ArrowKeys.is_navigable(&13));
    }

    #[test]
    fn names_and_closures() {
        assert_eq!(DirectionNames.translate("Up"), Some(Direction::Up));
        assert_eq!(DirectionNames.translate("enter"), None);
        assert!(DirectionNames.is_navigable("left"));

        // A gamepad d-pad mapped by button index.
        let dpad = |button: &u8| match button {
            12 => Some(Direction::Up),
            13 => Some(Direction::Down),
            _ => None,
        };
        assert_eq!(dpad.translate(&13), Some(Direction::Down));
        assert!(!dpad.is_navigable(&0));
    }
}
