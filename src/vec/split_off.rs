// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` keeps the prefix `[0, at)`,
    /// - the returned vector owns the suffix `[at, len)` in the same order.
    ///
    /// Elements are moved, never cloned. Returns [`Error::OutOfBounds`] if
    /// `at > len`; `self` is unchanged on error.
    ///
    /// ```rust
    /// use unrolled_list::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 4> = [1, 2, 3, 4].into();
    /// let tail = v.split_off(1).unwrap();
    /// assert_eq!(v.as_slice(), &[1]);
    /// assert_eq!(tail.as_slice(), &[2, 3, 4]);
    /// ```
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds { index: at, len });
        }
        // SAFETY: checked above.
        Ok(unsafe { self.split_off_unchecked(at) })
    }

    /// Moves `[at, len)` into a fresh vector and truncates `self` to `at`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `at <= self.len()`.
    pub(crate) unsafe fn split_off_unchecked(&mut self, at: usize) -> Self {
        debug_assert!(at <= self.len);
        let moved = self.len - at;
        let mut other = Self::new();
        // SAFETY: `[at, len)` is live in `self` and `other` is empty with the
        // same capacity. After the bitwise copy the source slots are outside
        // `self`'s live prefix, so each value has exactly one owner.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr().add(at), other.as_mut_ptr(), moved);
        }
        self.len = at;
        other.len = moved;
        other
    }
}
