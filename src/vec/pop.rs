// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: before the decrement `buf[self.len]` was the last live slot;
        // it is now outside the live prefix and read exactly once.
        Some(unsafe { self.buf.get_unchecked(self.len).assume_init_read() })
    }
}
