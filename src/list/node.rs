// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One link of an [`UnrolledList`](crate::UnrolledList).
//!
//! Ownership flows strictly head to tail: a node's `next` link owns the rest of
//! the chain, while `prev` is a plain back-reference used for traversal only.
//! Nodes are allocated with `Box` and released by the list (or its owning
//! iterator) with `Box::from_raw`.

// Crate imports
use crate::vec::StaticVec;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::ptr::NonNull;

pub(crate) type Link<T, const N: usize> = Option<NonNull<Node<T, N>>>;

pub(crate) struct Node<T, const N: usize> {
    pub(crate) buf: StaticVec<T, N>,
    /// Owning link to the following node.
    pub(crate) next: Link<T, N>,
    /// Non-owning back-reference.
    pub(crate) prev: Link<T, N>,
}

impl<T, const N: usize> Node<T, N> {
    /// Allocates an empty, unlinked node. The caller takes ownership.
    pub(crate) fn alloc() -> NonNull<Self> {
        let node = Box::new(Self {
            buf: StaticVec::new(),
            next: None,
            prev: None,
        });
        NonNull::from(Box::leak(node))
    }

    /// Splices a fresh empty node immediately after `node` and returns it.
    ///
    /// Only links are touched: no existing node moves and no buffer contents
    /// change. Both neighbours are patched so `next.prev == self` and
    /// `prev.next == self` keep holding.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of a chain, with no outstanding references
    /// to it or to its successor.
    pub(crate) unsafe fn insert_after(node: NonNull<Self>) -> NonNull<Self> {
        let fresh = Self::alloc();
        // SAFETY: `node`, its successor and `fresh` are live and unaliased.
        unsafe {
            let next = (*node.as_ptr()).next;
            (*fresh.as_ptr()).prev = Some(node);
            (*fresh.as_ptr()).next = next;
            (*node.as_ptr()).next = Some(fresh);
            if let Some(next) = next {
                (*next.as_ptr()).prev = Some(fresh);
            }
        }
        fresh
    }

    /// Reclaims ownership of a node allocated by [`alloc`](Self::alloc).
    ///
    /// # Safety
    ///
    /// `node` must come from `alloc`, must not have been freed already, and
    /// nothing may reach it through a link afterwards.
    pub(crate) unsafe fn into_box(node: NonNull<Self>) -> Box<Self> {
        // SAFETY: forwarded to the caller.
        unsafe { Box::from_raw(node.as_ptr()) }
    }
}
