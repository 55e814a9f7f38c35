// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `UnrolledList` type and its inherent API.
//!
//! An unrolled list is a doubly-linked chain of nodes, each holding a
//! [`StaticVec`](crate::StaticVec) of up to `N` elements. Appending fills the
//! tail node; when it is full the back half of the tail moves into a freshly
//! linked node before the new element goes in.

mod cursor;
mod iter;
pub(crate) mod node;

pub use cursor::{Cursor, CursorMut};
pub use iter::{Chunks, IntoIter, Iter, IterMut};

// Crate imports
use node::Node;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr::NonNull,
};

/// Node capacity used when `UnrolledList<T>` is written without one.
pub const DEFAULT_NODE_CAPACITY: usize = 32;

/// A doubly-linked list of fixed-capacity nodes.
///
/// - the list always owns at least one node, even when empty;
/// - `len` is the sum of the live counts of every node;
/// - appends go to the tail node; a full tail is split in half first, so every
///   node except the tail holds between `N / 2` and `N` elements.
///
/// `N` is the node capacity. It must be even and non-zero; any other value is
/// rejected when a constructor is instantiated.
///
/// ```compile_fail
/// use unrolled_list::UnrolledList;
///
/// let list: UnrolledList<u8, 3> = UnrolledList::new();
/// ```
///
/// # Examples
///
/// ```rust
/// use unrolled_list::UnrolledList;
///
/// let mut list: UnrolledList<u32> = UnrolledList::new();
/// for i in 0..64 {
///     list.push_back(i);
/// }
/// assert_eq!(list.len(), 64);
/// assert!(list.iter().copied().eq(0..64));
/// assert_eq!(list.begin().distance_to(&list.end()), Some(64));
/// ```
pub struct UnrolledList<T, const N: usize = DEFAULT_NODE_CAPACITY> {
    head: NonNull<Node<T, N>>,
    tail: NonNull<Node<T, N>>,
    len: usize,
    nodes: usize,
    marker: PhantomData<Box<Node<T, N>>>,
}

// SAFETY: the list exclusively owns its nodes; there is no shared state.
unsafe impl<T: Send, const N: usize> Send for UnrolledList<T, N> {}
// SAFETY: `&UnrolledList` only hands out `&T`.
unsafe impl<T: Sync, const N: usize> Sync for UnrolledList<T, N> {}

impl<T, const N: usize> UnrolledList<T, N> {
    const VALID_NODE_CAPACITY: () = assert!(
        N > 0 && N % 2 == 0,
        "UnrolledList node capacity must be even and non-zero"
    );

    /// Creates an empty list holding a single empty node.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_NODE_CAPACITY;
        let head = Node::alloc();
        Self {
            head,
            tail: head,
            len: 0,
            nodes: 1,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements. `O(1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the chain (at least one).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the node capacity `N`.
    #[inline]
    pub const fn node_capacity(&self) -> usize {
        N
    }

    /// Appends `value` to the end of the list.
    ///
    /// When the tail node is full it is split first: a new node is linked after
    /// it and receives the tail's back half (`N / 2` elements). A split costs
    /// `O(N)` and happens at most once every `N / 2` appends, so appending is
    /// `O(1)` amortized.
    pub fn push_back(&mut self, value: T) {
        // SAFETY: `tail` is a live node owned by this list and no reference
        // into it outlives this call.
        unsafe {
            if (*self.tail.as_ptr()).buf.is_full() {
                self.split_tail();
            }
            (*self.tail.as_ptr()).buf.push_unchecked(value);
        }
        self.len += 1;
    }

    /// Moves the back half of the full tail into a new node after it and makes
    /// that node the tail.
    ///
    /// # Safety
    ///
    /// The tail buffer must be full.
    unsafe fn split_tail(&mut self) {
        let old = self.tail;
        // SAFETY: `old` is live and full, so `N / 2 <= len`; `fresh` is the
        // node just linked after it.
        unsafe {
            debug_assert!((*old.as_ptr()).buf.is_full());
            let fresh = Node::insert_after(old);
            (*fresh.as_ptr()).buf = (*old.as_ptr()).buf.split_off_unchecked(N / 2);
            self.tail = fresh;
        }
        self.nodes += 1;
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is live; it is only empty when the list is empty.
        unsafe { (*self.head.as_ptr()).buf.first() }
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `front`, and `&mut self` guarantees exclusivity.
        unsafe { (*self.head.as_ptr()).buf.first_mut() }
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is live; it is only empty when the list is empty.
        unsafe { (*self.tail.as_ptr()).buf.last() }
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `back`, and `&mut self` guarantees exclusivity.
        unsafe { (*self.tail.as_ptr()).buf.last_mut() }
    }

    /// Drops every element and releases every node but one.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns a cursor at the first element (equal to [`end`](Self::end)
    /// when the list is empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.head, 0)
    }

    /// Returns the end cursor: one past the last live element of the tail
    /// node.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        // SAFETY: `tail` is live.
        let len = unsafe { (*self.tail.as_ptr()).buf.len() };
        Cursor::new(self.tail, len)
    }

    /// Returns a mutable cursor at the first element.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self.head, 0)
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.head, self.tail, self.len)
    }

    /// Returns a front-to-back iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(self.head, self.tail, self.len)
    }

    /// Returns an iterator over each node's live elements, in chain order.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_, T, N> {
        Chunks::new(self.head, self.nodes)
    }
}

impl<T, const N: usize> Drop for UnrolledList<T, N> {
    fn drop(&mut self) {
        // Keeps releasing the chain if an element destructor panics.
        struct DropGuard<T, const N: usize>(Option<NonNull<Node<T, N>>>);

        impl<T, const N: usize> Drop for DropGuard<T, N> {
            fn drop(&mut self) {
                while let Some(node) = self.0 {
                    // SAFETY: every node of the chain is freed exactly once.
                    let node = unsafe { Node::into_box(node) };
                    self.0 = node.next;
                }
            }
        }

        let mut guard = DropGuard(Some(self.head));
        while let Some(node) = guard.0 {
            // SAFETY: every node of the chain is freed exactly once, head to
            // tail, following the owning links.
            let node = unsafe { Node::into_box(node) };
            guard.0 = node.next;
            drop(node);
        }
    }
}

impl<T, const N: usize> Default for UnrolledList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for UnrolledList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, const N: usize> Clone for UnrolledList<T, N> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for UnrolledList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const N: usize> Eq for UnrolledList<T, N> {}

impl<T: Hash, const N: usize> Hash for UnrolledList<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T, const N: usize> Extend<T> for UnrolledList<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for UnrolledList<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> FromIterator<T> for UnrolledList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
