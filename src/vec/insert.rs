// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Full, vec::StaticVec};

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Costs `O(len - index)`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if self.try_insert(index, value).is_err() {
            panic!("StaticVec is full (capacity {N})");
        }
    }

    /// Like [`insert`](Self::insert), but hands `value` back in [`Full`] when
    /// the vector has no spare slot. The vector is left unchanged then.
    ///
    /// ```rust
    /// use unrolled_list::StaticVec;
    ///
    /// let mut v: StaticVec<u8, 2> = [1, 3].into();
    /// let rejected = v.try_insert(1, 2).unwrap_err();
    /// assert_eq!(rejected.into_inner(), 2);
    /// assert_eq!(v.as_slice(), &[1, 3]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), Full<T>> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == N {
            return Err(Full(value));
        }

        // SAFETY: `index <= len < N`, so both the source range `[index, len)`
        // and the destination `[index + 1, len + 1)` lie inside the buffer.
        // `ptr::copy` handles the overlap; the vacated slot is then written.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
        }
        self.len = len + 1;
        Ok(())
    }
}
