// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! `Index`/`IndexMut` accept anything a slice accepts (`usize` and every range
//! form) and panic on out-of-bounds exactly like slices. Views are restricted to
//! the live prefix `[0, len)`. Use [`StaticVec::at`](crate::StaticVec::at) for a
//! recoverable bounds check.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::StaticVec;

    #[test]
    fn test_indexing_and_ranges() {
        let mut v: StaticVec<i32, 6> = StaticVec::new();
        for x in 0..5 {
            v.push(x);
        }

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_live_prefix_panics() {
        // Capacity is 4 but only one slot is live.
        let mut v: StaticVec<i32, 4> = StaticVec::new();
        v.push(1);
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_upper_oob_panics() {
        let v: StaticVec<i32, 3> = [1, 2, 3].into();
        let _ = &v[..=3];
    }
}
