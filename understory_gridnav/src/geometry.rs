// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry providers.
//!
//! The navigator never lays anything out itself. A [`Geometry`] hands it the
//! bounds of each element at the moment a directional input is processed.

use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use kurbo::Rect;

use crate::Candidate;

/// Source of element bounds.
///
/// All rects returned during one navigation step must live in the same
/// coordinate space (for example viewport or world space). Returning `None`
/// means the element has no bounds right now; such candidates are skipped.
pub trait Geometry<K> {
    /// Bounds of `id`, if it can be measured.
    fn measure(&self, id: &K) -> Option<Rect>;
}

impl<K, F> Geometry<K> for F
where
    F: Fn(&K) -> Option<Rect>,
{
    #[inline]
    fn measure(&self, id: &K) -> Option<Rect> {
        self(id)
    }
}

impl<K, S> Geometry<K> for HashMap<K, Rect, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn measure(&self, id: &K) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// Linear lookup; the first entry with a matching id wins.
impl<K: PartialEq> Geometry<K> for [Candidate<K>] {
    fn measure(&self, id: &K) -> Option<Rect> {
        self.iter().find(|c| c.id == *id).map(|c| c.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_map_and_slice_agree() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 30.0, 10.0);

        let slice = [Candidate::new(1_u32, a), Candidate::new(2, b)];
        let mut map: HashMap<u32, Rect> = HashMap::new();
        map.insert(1, a);
        map.insert(2, b);
        let closure = |id: &u32| match id {
            1 => Some(a),
            2 => Some(b),
            _ => None,
        };

        for id in [1_u32, 2, 3] {
            let expected = slice[..].measure(&id);
            assert_eq!(map.measure(&id), expected);
            assert_eq!(closure.measure(&id), expected);
        }
        assert_eq!(slice[..].measure(&3), None);
    }
}
