// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector that stores its elements inline
//! in `N` slots of uninitialized storage and tracks a live count. Methods mirror
//! slice/`Vec` semantics where they make sense.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots `buf[..len]` hold initialized `T` values.
// - Slots `buf[len..N]` are logically uninitialized and are never read,
//   copied as `T`, or dropped.
// - Every method that constructs elements one at a time bumps `len` after
//   each write, so a panicking constructor never leaves an untracked value.

mod clone;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod split_off;
mod truncate;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr, slice,
};

/// A fixed-capacity vector whose elements live inline.
///
/// `StaticVec<T, N>` owns `N` slots of raw storage and a live count
/// `len ∈ 0..=N`. Only the prefix `[0, len)` holds live values; the rest of the
/// storage is reserved but never touched as `T`.
///
/// - capacity is known at compile time (`N`) and never grows;
/// - elements are constructed in place on demand and dropped exactly once;
/// - dropping the vector drops the live prefix in ascending index order.
///
/// # Capacity policy
///
/// Capacity overflow is a programming error. [`push`](Self::push) and
/// [`insert`](Self::insert) panic when the vector is full; callers that want to
/// recover use [`try_push`](Self::try_push), which hands the rejected value
/// back in a [`Full`](crate::Full).
///
/// Out-of-range indexing through `v[i]` panics like a slice. The bounds-checked
/// accessors [`at`](Self::at) and [`at_mut`](Self::at_mut) report
/// [`Error::OutOfBounds`] instead.
///
/// # Examples
///
/// ```rust
/// use unrolled_list::StaticVec;
///
/// let mut v: StaticVec<String, 4> = StaticVec::new();
/// v.push("a".to_string());
/// v.push("c".to_string());
/// v.insert(1, "b".to_string());
/// assert_eq!(v.as_slice(), ["a", "b", "c"]);
///
/// let tail = v.split_off(1).unwrap();
/// assert_eq!(v.as_slice(), ["a"]);
/// assert_eq!(tail.as_slice(), ["b", "c"]);
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current live count (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// Only the first `len` slots hold live values.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast()
    }

    /// Returns a mutable raw pointer to the first slot.
    ///
    /// Only the first `len` slots hold live values. Writing past `len` does not
    /// change the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast()
    }

    /// Returns the live prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[..len]` is initialized by invariant.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: `buf[..len]` is initialized by invariant.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Bounds-checked access.
    ///
    /// Returns [`Error::OutOfBounds`] when `i >= len`.
    ///
    /// ```rust
    /// use unrolled_list::{Error, StaticVec};
    ///
    /// let v: StaticVec<u8, 4> = StaticVec::filled(7);
    /// assert_eq!(v.at(3), Ok(&7));
    /// assert_eq!(v.at(4), Err(Error::OutOfBounds { index: 4, len: 4 }));
    /// ```
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(i).ok_or(Error::OutOfBounds { index: i, len })
    }

    /// Mutable bounds-checked access.
    ///
    /// Returns [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(i).ok_or(Error::OutOfBounds { index: i, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        let last = self.len.wrapping_sub(1);
        &self.as_slice()[last]
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        // SAFETY: the live prefix is initialized and is dropped exactly once;
        // `drop_in_place` on a slice drops in ascending index order.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T]> for StaticVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // Imports
    use super::StaticVec;
    use crate::Error;
    use std::{cell::Cell, rc::Rc};

    /// Counts constructions and drops through a shared ledger.
    #[derive(Debug)]
    pub(crate) struct Tracked {
        pub(crate) value: i32,
        ledger: Rc<Ledger>,
    }

    #[derive(Debug, Default)]
    pub(crate) struct Ledger {
        pub(crate) built: Cell<usize>,
        pub(crate) dropped: Cell<usize>,
        pub(crate) drop_order: std::cell::RefCell<Vec<i32>>,
    }

    impl Ledger {
        pub(crate) fn make(self: &Rc<Self>, value: i32) -> Tracked {
            self.built.set(self.built.get() + 1);
            Tracked {
                value,
                ledger: Rc::clone(self),
            }
        }

        pub(crate) fn live(&self) -> usize {
            self.built.get() - self.dropped.get()
        }
    }

    thread_local! {
        static FRAGILE_BUDGET: Cell<usize> = const { Cell::new(usize::MAX) };
        static FRAGILE_LIVE: Cell<usize> = const { Cell::new(0) };
    }

    /// An element whose `Clone` and `Default` panic once the per-thread budget
    /// set by [`Fragile::arm`] is spent.
    #[derive(Debug)]
    pub(crate) struct Fragile(());

    impl Fragile {
        /// Allows `budget` more constructions before the next one panics.
        pub(crate) fn arm(budget: usize) {
            FRAGILE_BUDGET.with(|b| b.set(budget));
        }

        /// Number of instances built and not yet dropped on this thread.
        pub(crate) fn live() -> usize {
            FRAGILE_LIVE.with(Cell::get)
        }

        fn build() -> Self {
            let left = FRAGILE_BUDGET.with(Cell::get);
            if left == 0 {
                panic!("Fragile construction budget spent");
            }
            FRAGILE_BUDGET.with(|b| b.set(left - 1));
            FRAGILE_LIVE.with(|l| l.set(l.get() + 1));
            Fragile(())
        }
    }

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            Self::build()
        }
    }

    impl Default for Fragile {
        fn default() -> Self {
            Self::build()
        }
    }

    impl Drop for Fragile {
        fn drop(&mut self) {
            FRAGILE_LIVE.with(|l| l.set(l.get() - 1));
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.ledger.make(self.value)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.ledger.dropped.set(self.ledger.dropped.get() + 1);
            self.ledger.drop_order.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn test_push_fills_in_order() {
        let mut v: StaticVec<i32, 32> = StaticVec::new();
        assert_eq!(v.len(), 0);
        for i in 0..32 {
            v.push(i);
        }
        for i in 0..32 {
            assert_eq!(v[i as usize], i);
        }
        assert_eq!(v.len(), 32);
        assert!(v.is_full());
    }

    #[test]
    fn test_capacity_scenario() {
        let mut v: StaticVec<i32, 32> = StaticVec::new();
        for i in 0..32 {
            v.push(i);
        }
        assert_eq!(v.len(), 32);
        assert_eq!(*v.front(), 0);
        assert_eq!(*v.back(), 31);

        for _ in 0..5 {
            v.pop();
        }
        assert_eq!(v.len(), 27);

        v.insert(8, 1337);
        assert_eq!(v.len(), 28);
        assert_eq!(v[8], 1337);
        assert_eq!(v[7], 7);
        assert_eq!(v[9], 8);
    }

    #[test]
    fn test_for_each_transforms_in_place() {
        let mut v: StaticVec<i32, 32> = StaticVec::from(core::array::from_fn(|i| i as i32));
        v.iter_mut().for_each(|x| *x *= 2);
        for i in 0..32 {
            assert_eq!(v[i], (i as i32) * 2);
        }
    }

    #[test]
    fn test_at_matches_unchecked_access() {
        let mut v: StaticVec<i32, 8> = StaticVec::new();
        v.push(10);
        v.push(20);
        assert_eq!(v.at(0), Ok(&10));
        assert_eq!(v.at(1), Ok(&v[1]));
        assert_eq!(v.at(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
        *v.at_mut(1).unwrap() = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
        assert_eq!(
            v.at_mut(7).map(|x| *x),
            Err(Error::OutOfBounds { index: 7, len: 2 })
        );
    }

    #[test]
    fn test_default_and_capacity() {
        let v: StaticVec<i32, 4> = StaticVec::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_empty());
        assert_eq!(v.spare_capacity(), 4);
        assert_eq!(StaticVec::<i32, 4>::CAPACITY, 4);
    }

    #[test]
    fn test_getters() {
        let mut v: StaticVec<i32, 4> = StaticVec::new();
        v.push(7);
        v.push(8);
        v.push(9);
        assert!(v.contains(&7));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
    }

    #[test]
    #[should_panic]
    fn test_front_of_empty_panics() {
        let v: StaticVec<i32, 4> = StaticVec::new();
        let _ = v.front();
    }

    #[test]
    #[should_panic]
    fn test_back_of_empty_panics() {
        let v: StaticVec<i32, 4> = StaticVec::new();
        let _ = v.back();
    }

    #[test]
    fn test_drop_destroys_live_slots_in_index_order() {
        let ledger = Rc::new(Ledger::default());
        {
            let mut v: StaticVec<Tracked, 8> = StaticVec::new();
            for i in 0..5 {
                v.push(ledger.make(i));
            }
            assert_eq!(ledger.live(), 5);
        }
        assert_eq!(ledger.built.get(), 5);
        assert_eq!(ledger.dropped.get(), 5);
        assert_eq!(*ledger.drop_order.borrow(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_construction_destruction_parity_across_mutations() {
        let ledger = Rc::new(Ledger::default());
        {
            let mut v: StaticVec<Tracked, 16> = StaticVec::new();
            for i in 0..10 {
                v.push(ledger.make(i));
            }
            v.insert(3, ledger.make(100));
            drop(v.remove(5));
            drop(v.pop());
            let tail = v.split_off(4).unwrap();
            assert_eq!(v.len() + tail.len(), 9);
            v.truncate(2);
            let copy = v.clone();
            assert_eq!(copy.len(), 2);
            assert_eq!(ledger.live(), 2 + 2 + tail.len());
        }
        assert_eq!(ledger.built.get(), ledger.dropped.get());
    }

    #[test]
    fn test_debug_and_comparisons() {
        use core::cmp::Ordering;
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a: StaticVec<i32, 4> = [1, 2, 3, 4].into();
        let mut b: StaticVec<i32, 4> = [1, 2, 3, 4].into();
        assert_eq!(a, b);
        b.pop();
        assert_ne!(a, b);
        assert_eq!(b.cmp(&a), Ordering::Less);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Greater));
        assert_eq!(b, [1, 2, 3][..]);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3, 4][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());

        let dbg = format!("{b:?}");
        assert!(dbg.contains("StaticVec"));
        assert!(dbg.contains("[1, 2, 3]"));
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v: StaticVec<i32, 3> = StaticVec::new();
        v.push(1);
        v.push(2);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_ref(), &[1, 22]);
        v.as_mut()[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
    }

    #[test]
    fn test_zero_sized_type() {
        let mut v: StaticVec<(), 4> = StaticVec::new();
        v.push(());
        v.push(());
        assert_eq!(v.len(), 2);
        assert_eq!(v.pop(), Some(()));
        assert_eq!(v.iter().count(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        let mut v: StaticVec<u8, 0> = StaticVec::new();
        assert!(v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.try_push(1).map_err(|e| e.into_inner()), Err(1));
        assert_eq!(v.pop(), None);
    }
}
