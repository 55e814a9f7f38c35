// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterators over an [`UnrolledList`](crate::UnrolledList).
//!
//! `Iter`, `IterMut` and `IntoIter` walk the chain from both ends. Each keeps a
//! front and a back in-node iterator plus the inclusive span of nodes neither
//! end has entered yet, so every node is visited by exactly one side.

// Crate imports
use super::{node::Node, UnrolledList};
use crate::{iter::IntoIter as VecIntoIter, vec::StaticVec};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, iter::FusedIterator, marker::PhantomData, mem, ptr::NonNull, slice};

type Span<T, const N: usize> = Option<(NonNull<Node<T, N>>, NonNull<Node<T, N>>)>;

/// Narrows `span` after its first node has been entered.
///
/// # Safety
///
/// `first` must be live.
unsafe fn after_first<T, const N: usize>(
    first: NonNull<Node<T, N>>,
    last: NonNull<Node<T, N>>,
) -> Span<T, N> {
    if first == last {
        return None;
    }
    // SAFETY: forwarded to the caller.
    unsafe { (*first.as_ptr()).next }.map(|next| (next, last))
}

/// Narrows `span` after its last node has been entered.
///
/// # Safety
///
/// `last` must be live.
unsafe fn before_last<T, const N: usize>(
    first: NonNull<Node<T, N>>,
    last: NonNull<Node<T, N>>,
) -> Span<T, N> {
    if first == last {
        return None;
    }
    // SAFETY: forwarded to the caller.
    unsafe { (*last.as_ptr()).prev }.map(|prev| (first, prev))
}

/// Borrowing iterator returned by [`UnrolledList::iter`].
pub struct Iter<'a, T, const N: usize> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
    span: Span<T, N>,
    len: usize,
    marker: PhantomData<&'a Node<T, N>>,
}

// SAFETY: `Iter` behaves like `&'a T`.
unsafe impl<T: Sync, const N: usize> Send for Iter<'_, T, N> {}
// SAFETY: `Iter` behaves like `&'a T`.
unsafe impl<T: Sync, const N: usize> Sync for Iter<'_, T, N> {}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(head: NonNull<Node<T, N>>, tail: NonNull<Node<T, N>>, len: usize) -> Self {
        Self {
            front: [].iter(),
            back: [].iter(),
            span: Some((head, tail)),
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.front.next() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.back.next()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: the list is borrowed for `'a` and `first` is entered once.
            let node: &'a Node<T, N> = unsafe { &*first.as_ptr() };
            self.front = node.buf.iter();
            // SAFETY: `first` is live.
            self.span = unsafe { after_first(first, last) };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.back.next_back() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.front.next_back()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: the list is borrowed for `'a` and `last` is entered once.
            let node: &'a Node<T, N> = unsafe { &*last.as_ptr() };
            self.back = node.buf.iter();
            // SAFETY: `last` is live.
            self.span = unsafe { before_last(first, last) };
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            span: self.span,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutably borrowing iterator returned by [`UnrolledList::iter_mut`].
pub struct IterMut<'a, T, const N: usize> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
    span: Span<T, N>,
    len: usize,
    marker: PhantomData<&'a mut Node<T, N>>,
}

// SAFETY: `IterMut` behaves like `&'a mut T`.
unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}
// SAFETY: `IterMut` behaves like `&'a mut T`.
unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(head: NonNull<Node<T, N>>, tail: NonNull<Node<T, N>>, len: usize) -> Self {
        Self {
            front: [].iter_mut(),
            back: [].iter_mut(),
            span: Some((head, tail)),
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(item) = self.front.next() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.back.next()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: the list is exclusively borrowed for `'a` and each node
            // is entered by exactly one side, once.
            let node: &'a mut Node<T, N> = unsafe { &mut *first.as_ptr() };
            let next = node.next;
            self.front = node.buf.iter_mut();
            self.span = if first == last {
                None
            } else {
                next.map(|next| (next, last))
            };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(item) = self.back.next_back() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.front.next_back()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: as in `next`.
            let node: &'a mut Node<T, N> = unsafe { &mut *last.as_ptr() };
            let prev = node.prev;
            self.back = node.buf.iter_mut();
            self.span = if first == last {
                None
            } else {
                prev.map(|prev| (first, prev))
            };
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}
impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IterMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

/// Owning iterator returned by `UnrolledList::into_iter()`.
///
/// Nodes are released as soon as one side enters them; elements that are never
/// yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    front: VecIntoIter<T, N>,
    back: VecIntoIter<T, N>,
    span: Span<T, N>,
    len: usize,
    marker: PhantomData<Box<Node<T, N>>>,
}

// SAFETY: the iterator exclusively owns the remaining nodes.
unsafe impl<T: Send, const N: usize> Send for IntoIter<T, N> {}
// SAFETY: `&IntoIter` exposes nothing but its length.
unsafe impl<T: Sync, const N: usize> Sync for IntoIter<T, N> {}

impl<T, const N: usize> IntoIter<T, N> {
    /// Takes the buffer out of an entered node and frees the node.
    ///
    /// # Safety
    ///
    /// `node` must be owned by this iterator and entered exactly once.
    unsafe fn enter(node: NonNull<Node<T, N>>) -> VecIntoIter<T, N> {
        // SAFETY: forwarded to the caller.
        let mut node = unsafe { Node::into_box(node) };
        mem::take(&mut node.buf).into_iter()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.front.next() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.back.next()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: `first` is owned by the iterator and still live; the span
            // is narrowed before the node is freed.
            unsafe {
                self.span = after_first(first, last);
                self.front = Self::enter(first);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.back.next_back() {
                self.len -= 1;
                return Some(item);
            }
            let Some((first, last)) = self.span else {
                let item = self.front.next_back()?;
                self.len -= 1;
                return Some(item);
            };
            // SAFETY: as in `next`.
            unsafe {
                self.span = before_last(first, last);
                self.back = Self::enter(last);
            }
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        while let Some((first, last)) = self.span {
            // SAFETY: every node left in the span is owned by the iterator and
            // freed exactly once.
            unsafe {
                self.span = after_first(first, last);
                drop(Node::into_box(first));
            }
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.len).finish()
    }
}

/// Iterator over each node's live elements, returned by
/// [`UnrolledList::chunks`].
pub struct Chunks<'a, T, const N: usize> {
    next: Option<NonNull<Node<T, N>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T, N>>,
}

// SAFETY: `Chunks` behaves like `&'a [T]`.
unsafe impl<T: Sync, const N: usize> Send for Chunks<'_, T, N> {}
// SAFETY: `Chunks` behaves like `&'a [T]`.
unsafe impl<T: Sync, const N: usize> Sync for Chunks<'_, T, N> {}

impl<'a, T, const N: usize> Chunks<'a, T, N> {
    pub(crate) fn new(head: NonNull<Node<T, N>>, nodes: usize) -> Self {
        Self {
            next: Some(head),
            remaining: nodes,
            marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Chunks<'a, T, N> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        let current = self.next?;
        // SAFETY: the list is borrowed for `'a`.
        let node: &'a Node<T, N> = unsafe { &*current.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(node.buf.as_slice())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Chunks<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Chunks<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a UnrolledList<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut UnrolledList<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for UnrolledList<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let this = mem::ManuallyDrop::new(self);
        IntoIter {
            front: StaticVec::new().into_iter(),
            back: StaticVec::new().into_iter(),
            span: Some((this.head, this.tail)),
            len: this.len,
            marker: PhantomData,
        }
    }
}
