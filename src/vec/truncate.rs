// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Shortens the vector to `new_len`, dropping `[new_len, len)` in index
    /// order. No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `[new_len, len)` was live and is no longer reachable.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element, leaving the vector empty.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
