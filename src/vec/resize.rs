// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T: Default, const N: usize> StaticVec<T, N> {
    /// Grows the vector to `new_len`, default-constructing the new elements in
    /// place.
    ///
    /// Shrinking is not performed: a `new_len <= len` is a no-op (use
    /// [`truncate`](Self::truncate) for that). Returns [`Error::Full`] if
    /// `new_len > N`, leaving the vector unchanged.
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len > N {
            return Err(Error::Full);
        }
        while self.len < new_len {
            // SAFETY: `len < new_len <= N`.
            unsafe { self.push_unchecked(T::default()) };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        vec::{tests::Fragile, StaticVec},
        Error,
    };
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_resize_default_grows_only() {
        let mut v: StaticVec<i32, 5> = StaticVec::new();
        v.push(4);
        v.resize_default(3).unwrap();
        assert_eq!(v.as_slice(), &[4, 0, 0]);
        v.resize_default(1).unwrap();
        assert_eq!(v.as_slice(), &[4, 0, 0]);
        v.resize_default(5).unwrap();
        assert!(v.is_full());
    }

    #[test]
    fn test_resize_default_past_capacity_is_noop_error() {
        let mut v: StaticVec<String, 2> = StaticVec::new();
        assert_eq!(v.resize_default(3), Err(Error::Full));
        assert!(v.is_empty());
    }

    #[test]
    fn test_resize_default_panic_keeps_built_prefix() {
        Fragile::arm(usize::MAX);
        let baseline = Fragile::live();
        let mut v: StaticVec<Fragile, 8> = StaticVec::new();

        // Three defaults succeed, the fourth panics.
        Fragile::arm(3);
        let result = catch_unwind(AssertUnwindSafe(|| v.resize_default(6)));
        assert!(result.is_err());
        Fragile::arm(usize::MAX);
        assert_eq!(v.len(), 3);
        assert_eq!(Fragile::live(), baseline + 3);

        drop(v);
        assert_eq!(Fragile::live(), baseline);
    }
}
