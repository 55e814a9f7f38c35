// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.iter() {
            // SAFETY: `out` never holds more elements than `self`.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }
}
