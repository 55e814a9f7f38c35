// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector. No slot is initialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a full vector whose `N` slots are all clones of `seed`.
    ///
    /// The last slot receives `seed` itself, so `T::clone` runs `N - 1` times.
    /// If a clone panics, the slots filled so far are dropped normally.
    ///
    /// ```rust
    /// use unrolled_list::StaticVec;
    ///
    /// let v: StaticVec<String, 3> = StaticVec::filled("x".to_string());
    /// assert!(v.is_full());
    /// assert_eq!(v.as_slice(), ["x", "x", "x"]);
    /// ```
    pub fn filled(seed: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        if N == 0 {
            return v;
        }
        for _ in 1..N {
            // SAFETY: the loop runs `N - 1` times, so `len < N` before each push.
            unsafe { v.push_unchecked(seed.clone()) };
        }
        // SAFETY: exactly one slot remains.
        unsafe { v.push_unchecked(seed) };
        v
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
