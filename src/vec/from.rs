// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    /// Takes ownership of every array element; the result is full.
    fn from(src: [T; N]) -> Self {
        Self {
            buf: src.map(MaybeUninit::new),
            len: N,
        }
    }
}
