// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it.
//! - `&StaticVec` and `&mut StaticVec` iterate as slices.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr, slice,
};

/// Owned iterator returned by `StaticVec::into_iter()`.
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    // `buf[front..back]` is initialized and not yet yielded.
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` is initialized by invariant.
        unsafe {
            slice::from_raw_parts(
                self.buf.as_ptr().add(self.front).cast(),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: `i` was inside the unyielded range, which now excludes it.
        Some(unsafe { self.buf.get_unchecked(i).assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` was inside the unyielded range, which now excludes it.
        Some(unsafe { self.buf.get_unchecked(self.back).assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        // SAFETY: the unyielded range is initialized and owned by the iterator.
        unsafe {
            let first = self.buf.as_mut_ptr().add(self.front).cast::<T>();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, rem));
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never dropped, so ownership of the live prefix
            // moves to the iterator exactly once.
            buf: unsafe { ptr::read(&this.buf) },
            front: 0,
            back: this.len,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
