// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Full, vec::StaticVec};

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `value` at index `len`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) {
        assert!(self.len < N, "StaticVec is full (capacity {N})");
        // SAFETY: checked above.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends `value` if there is room, otherwise hands it back in [`Full`].
    ///
    /// ```rust
    /// use unrolled_list::StaticVec;
    ///
    /// let mut v: StaticVec<u8, 1> = StaticVec::new();
    /// assert!(v.try_push(1).is_ok());
    /// assert_eq!(v.try_push(2).unwrap_err().into_inner(), 2);
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Full<T>> {
        if self.len == N {
            return Err(Full(value));
        }
        // SAFETY: `len < N`.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self.len() < N`. Only a debug assertion
    /// checks this.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N, "push_unchecked on a full StaticVec");
        // SAFETY: `len < N` per the caller contract, and the slot is vacant.
        unsafe { self.buf.get_unchecked_mut(self.len).write(value) };
        self.len += 1;
    }
}
