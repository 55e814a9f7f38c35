// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `unrolled-list`
//!
//! A `no_std` + `alloc` unrolled linked list built on an inline,
//! fixed-capacity vector.
//!
//! The crate has two layers:
//!
//! - [`StaticVec<T, N>`] stores up to `N` elements inline and tracks a logical
//!   length `len ∈ 0..=N`. Slots past `len` stay uninitialized; elements are
//!   constructed when pushed or inserted and dropped exactly once.
//! - [`UnrolledList<T, N>`] chains heap-allocated nodes, each holding one
//!   `StaticVec<T, N>`. `N` defaults to [`DEFAULT_NODE_CAPACITY`] (32).
//!
//! ## Growth policy
//!
//! [`UnrolledList::push_back`] appends to the tail node. When the tail is full,
//! a new node is linked after it and the back half of the tail (`N / 2`
//! elements) moves there before the value is appended. Every node except the
//! tail therefore stays at least half full, and element order is preserved.
//!
//! ## Capacity errors
//!
//! - Infallible operations such as [`StaticVec::push`] and
//!   [`StaticVec::insert`] panic when the buffer is full.
//! - [`StaticVec::try_push`] and [`StaticVec::try_insert`] return [`Full`]
//!   with the rejected value.
//! - Checked access ([`StaticVec::at`], [`StaticVec::at_mut`]) returns
//!   [`Error::OutOfBounds`].
//!
//! ## Traversal
//!
//! [`UnrolledList::iter`], [`UnrolledList::iter_mut`] and `into_iter` are
//! double-ended and exact-size. [`UnrolledList::begin`] and
//! [`UnrolledList::end`] return [`Cursor`]s, positions that can step in both
//! directions across node boundaries. `end()` sits one past the last element.
//!
//! ```rust
//! use unrolled_list::UnrolledList;
//!
//! let mut list: UnrolledList<i32, 4> = (0..6).collect();
//! assert_eq!(list.node_count(), 2);
//!
//! let chunks: Vec<&[i32]> = list.chunks().collect();
//! assert_eq!(chunks, [&[0, 1][..], &[2, 3, 4, 5][..]]);
//!
//! let mut cursor = list.end();
//! cursor.move_prev();
//! assert_eq!(cursor.get(), Some(&5));
//!
//! list.iter_mut().for_each(|x| *x *= 10);
//! assert_eq!(list.iter().rev().next(), Some(&50));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
pub mod list;
#[cfg(test)]
mod proptests;
mod vec;

// Public exports (crate API surface)
pub use error::{Error, Full};
pub use iter::IntoIter;
pub use list::{
    Chunks, Cursor, CursorMut, Iter, IterMut, UnrolledList, DEFAULT_NODE_CAPACITY,
};
pub use vec::StaticVec;
