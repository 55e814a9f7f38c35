// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`StaticVec`](crate::StaticVec).
//!
//! Only bounds and capacity conditions are reported here. Both types are cheap
//! to construct and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was outside the live prefix `[0, len)`.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The live length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len {len})")
            }
        }
    }
}

impl CoreError for Error {}

/// The value rejected by [`StaticVec::try_push`](crate::StaticVec::try_push)
/// because the vector was already full.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be stored.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capacity exceeded")
    }
}

impl<T> CoreError for Full<T> {}

impl<T> From<Full<T>> for Error {
    fn from(_: Full<T>) -> Self {
        Self::Full
    }
}
