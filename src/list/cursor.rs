// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bidirectional cursors over an [`UnrolledList`](crate::UnrolledList).
//!
//! A cursor is a `(node, index)` pair. Moving forward from the last live slot of
//! a node hops to slot `0` of the next node; moving backward from slot `0` hops
//! to the last live slot of the previous node. On the tail node, moving past the
//! last element lands on the end position `(tail, tail.len)`.
//!
//! Cursors borrow the list, so no structural mutation can happen while one is
//! alive. Moving past `end()` or before `begin()` is a logic error: it never
//! causes undefined behavior, but the cursor then points nowhere useful and
//! [`Cursor::get`] returns `None`.

// Crate imports
use super::node::Node;

// Core imports
use core::{fmt, marker::PhantomData, ptr::NonNull};

/// Shared movement logic for both cursor kinds.
struct Position<T, const N: usize> {
    node: NonNull<Node<T, N>>,
    index: usize,
}

impl<T, const N: usize> Clone for Position<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Position<T, N> {}

impl<T, const N: usize> PartialEq for Position<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.index == other.index
    }
}

impl<T, const N: usize> Position<T, N> {
    /// # Safety
    ///
    /// The node must be live for as long as the returned reference is used.
    unsafe fn node<'a>(self) -> &'a Node<T, N> {
        // SAFETY: forwarded to the caller.
        unsafe { &*self.node.as_ptr() }
    }

    /// # Safety
    ///
    /// The node and its neighbours must be live and not mutably borrowed.
    unsafe fn move_next(&mut self) {
        // SAFETY: forwarded to the caller.
        let node = unsafe { self.node() };
        if self.index.wrapping_add(1) == node.buf.len() {
            if let Some(next) = node.next {
                self.node = next;
                self.index = 0;
                return;
            }
        }
        // On the tail this reaches the end position.
        self.index += 1;
    }

    /// # Safety
    ///
    /// The node and its neighbours must be live and not mutably borrowed.
    unsafe fn move_prev(&mut self) {
        if self.index == 0 {
            // SAFETY: forwarded to the caller.
            if let Some(prev) = unsafe { self.node() }.prev {
                // Every node before the tail holds at least `N / 2` elements.
                // SAFETY: `prev` is a live neighbour.
                let len = unsafe { (*prev.as_ptr()).buf.len() };
                self.node = prev;
                self.index = len - 1;
                return;
            }
        }
        debug_assert!(self.index > 0, "cursor moved before begin()");
        self.index = self.index.wrapping_sub(1);
    }

    /// # Safety
    ///
    /// The node must be live.
    unsafe fn is_end(self) -> bool {
        // SAFETY: forwarded to the caller.
        let node = unsafe { self.node() };
        node.next.is_none() && self.index == node.buf.len()
    }

    /// # Safety
    ///
    /// The node must be live.
    unsafe fn offset_in_node(self, delta: isize) -> Option<Self> {
        // SAFETY: forwarded to the caller.
        let node = unsafe { self.node() };
        let len = node.buf.len();
        let index = self.index.checked_add_signed(delta)?;
        // Only the tail has a one-past-the-end slot.
        let valid = index < len || (index == len && node.next.is_none());
        valid.then_some(Self {
            node: self.node,
            index,
        })
    }
}

/// A read-only cursor into an [`UnrolledList`](crate::UnrolledList).
///
/// Obtained from [`UnrolledList::begin`](crate::UnrolledList::begin) and
/// [`UnrolledList::end`](crate::UnrolledList::end). Two cursors are equal when
/// they address the same node and the same in-node index.
///
/// ```rust
/// use unrolled_list::UnrolledList;
///
/// let list: UnrolledList<i32, 4> = (0..10).collect();
/// let mut c = list.end();
/// let mut seen = Vec::new();
/// while c != list.begin() {
///     c.move_prev();
///     seen.push(*c.get().unwrap());
/// }
/// assert_eq!(seen, (0..10).rev().collect::<Vec<_>>());
/// ```
pub struct Cursor<'a, T, const N: usize> {
    pos: Position<T, N>,
    marker: PhantomData<&'a Node<T, N>>,
}

// SAFETY: a `Cursor` behaves like `&'a T`.
unsafe impl<T: Sync, const N: usize> Send for Cursor<'_, T, N> {}
// SAFETY: a `Cursor` behaves like `&'a T`.
unsafe impl<T: Sync, const N: usize> Sync for Cursor<'_, T, N> {}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    pub(crate) fn new(node: NonNull<Node<T, N>>, index: usize) -> Self {
        Self {
            pos: Position { node, index },
            marker: PhantomData,
        }
    }

    /// Returns the element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        // SAFETY: the list is borrowed for `'a`, so the node is live and
        // immutable for that long.
        unsafe { self.pos.node() }.buf.get(self.pos.index)
    }

    /// Advances to the next element, crossing into the next node as needed.
    #[inline]
    pub fn move_next(&mut self) {
        // SAFETY: the list is borrowed for `'a`.
        unsafe { self.pos.move_next() }
    }

    /// Retreats to the previous element, crossing into the previous node as
    /// needed. Must not be called on `begin()`.
    #[inline]
    pub fn move_prev(&mut self) {
        // SAFETY: the list is borrowed for `'a`.
        unsafe { self.pos.move_prev() }
    }

    /// Returns the index of the cursor inside its current node.
    #[inline]
    pub fn index_in_node(&self) -> usize {
        self.pos.index
    }

    /// Returns `true` at the end position of the list.
    #[inline]
    pub fn is_end(&self) -> bool {
        // SAFETY: the list is borrowed for `'a`.
        unsafe { self.pos.is_end() }
    }

    /// Moves `delta` slots inside the current node without following links.
    ///
    /// Returns `None` if the result would leave `[0, node len)`. The tail node
    /// also accepts `node len`, which is the end position.
    #[inline]
    pub fn offset_in_node(&self, delta: isize) -> Option<Self> {
        // SAFETY: the list is borrowed for `'a`.
        let pos = unsafe { self.pos.offset_in_node(delta) }?;
        Some(Self {
            pos,
            marker: PhantomData,
        })
    }

    /// Counts the forward steps from `self` to `other`.
    ///
    /// Returns `None` if `other` is not reached before the end of the list.
    /// Costs `O(distance)`.
    pub fn distance_to(&self, other: &Self) -> Option<usize> {
        let mut cursor = *self;
        let mut steps = 0;
        while cursor != *other {
            cursor.get()?;
            cursor.move_next();
            steps += 1;
        }
        Some(steps)
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index_in_node", &self.pos.index)
            .field("current", &self.get())
            .finish()
    }
}

/// A cursor that can modify the element it points at.
///
/// Obtained from [`UnrolledList::cursor_mut`](crate::UnrolledList::cursor_mut),
/// positioned at `begin()`. It cannot add or remove elements.
pub struct CursorMut<'a, T, const N: usize> {
    pos: Position<T, N>,
    marker: PhantomData<&'a mut Node<T, N>>,
}

// SAFETY: a `CursorMut` behaves like `&'a mut T`.
unsafe impl<T: Send, const N: usize> Send for CursorMut<'_, T, N> {}
// SAFETY: a `CursorMut` behaves like `&'a mut T`.
unsafe impl<T: Sync, const N: usize> Sync for CursorMut<'_, T, N> {}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    pub(crate) fn new(node: NonNull<Node<T, N>>, index: usize) -> Self {
        Self {
            pos: Position { node, index },
            marker: PhantomData,
        }
    }

    /// Returns the element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: the list is exclusively borrowed for `'a`.
        unsafe { self.pos.node() }.buf.get(self.pos.index)
    }

    /// Returns the element under the cursor mutably, or `None` at the end
    /// position.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the list is exclusively borrowed for `'a` and the returned
        // reference borrows `self`, so it cannot coexist with another one.
        let node = unsafe { &mut *self.pos.node.as_ptr() };
        node.buf.get_mut(self.pos.index)
    }

    /// Advances to the next element, crossing into the next node as needed.
    #[inline]
    pub fn move_next(&mut self) {
        // SAFETY: the list is exclusively borrowed for `'a`.
        unsafe { self.pos.move_next() }
    }

    /// Retreats to the previous element. Must not be called at `begin()`.
    #[inline]
    pub fn move_prev(&mut self) {
        // SAFETY: the list is exclusively borrowed for `'a`.
        unsafe { self.pos.move_prev() }
    }

    /// Returns the index of the cursor inside its current node.
    #[inline]
    pub fn index_in_node(&self) -> usize {
        self.pos.index
    }

    /// Returns `true` at the end position of the list.
    #[inline]
    pub fn is_end(&self) -> bool {
        // SAFETY: the list is exclusively borrowed for `'a`.
        unsafe { self.pos.is_end() }
    }

    /// Returns a read-only cursor at the same position, borrowing `self`.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.pos.node, self.pos.index)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index_in_node", &self.pos.index)
            .field("current", &self.get())
            .finish()
    }
}
