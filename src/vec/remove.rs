// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left.
    ///
    /// After the call, `index` addresses the element that followed the removed
    /// one, or equals `len` if the last element was removed. Returns `None` if
    /// `index >= len`. Costs `O(len - index)`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }

        // SAFETY: `index < len`, so the slot is live. After the read it is
        // logically vacant and the tail `[index + 1, len)` is moved over it.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        self.remove(index).ok_or(Error::OutOfBounds { index, len })
    }
}
