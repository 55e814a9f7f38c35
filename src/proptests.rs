// This file is part of unrolled-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests comparing both containers against `Vec`.

// Imports
use crate::{StaticVec, UnrolledList};
use proptest::prelude::*;
use std::vec::Vec;

#[derive(Debug, Clone)]
enum Op {
    Push(u16),
    Insert(usize, u16),
    Remove(usize),
    Pop,
    Truncate(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Push),
        2 => (0..20usize, any::<u16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..20usize).prop_map(Op::Remove),
        1 => Just(Op::Pop),
        1 => (0..20usize).prop_map(Op::Truncate),
    ]
}

proptest! {
    #[test]
    fn static_vec_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
        let mut v: StaticVec<u16, 16> = StaticVec::new();
        let mut model: Vec<u16> = Vec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    let pushed = v.try_push(x).is_ok();
                    prop_assert_eq!(pushed, model.len() < 16);
                    if pushed {
                        model.push(x);
                    }
                }
                Op::Insert(i, x) => {
                    if i <= model.len() && model.len() < 16 {
                        v.insert(i, x);
                        model.insert(i, x);
                    }
                }
                Op::Remove(i) => {
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(v.remove(i), expected);
                }
                Op::Pop => prop_assert_eq!(v.pop(), model.pop()),
                Op::Truncate(n) => {
                    v.truncate(n);
                    model.truncate(n);
                }
            }
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    /// Splitting and re-appending restores the original contents.
    #[test]
    fn static_vec_split_off_partitions(
        items in prop::collection::vec(any::<i32>(), 0..=12),
        at in 0..=12usize,
    ) {
        let mut v: StaticVec<i32, 12> = StaticVec::new();
        items.iter().for_each(|&x| v.push(x));
        match v.split_off(at) {
            Ok(tail) => {
                prop_assert!(at <= items.len());
                prop_assert_eq!(v.as_slice(), &items[..at]);
                prop_assert_eq!(tail.as_slice(), &items[at..]);
                tail.into_iter().for_each(|x| v.push(x));
                prop_assert_eq!(v.as_slice(), items.as_slice());
            }
            Err(_) => {
                prop_assert!(at > items.len());
                prop_assert_eq!(v.as_slice(), items.as_slice());
            }
        }
    }

    #[test]
    fn list_iterates_like_vec(items in prop::collection::vec(any::<u32>(), 0..300)) {
        let list: UnrolledList<u32, 8> = items.iter().copied().collect();
        prop_assert_eq!(list.len(), items.len());
        prop_assert!(list.iter().eq(items.iter()));
        prop_assert!(list.iter().rev().eq(items.iter().rev()));
        prop_assert_eq!(list.front(), items.first());
        prop_assert_eq!(list.back(), items.last());
        prop_assert_eq!(list.begin().distance_to(&list.end()), Some(items.len()));
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), items);
    }

    /// Every node but the tail stays between half full and full.
    #[test]
    fn list_nodes_stay_half_full(n in 0..400usize) {
        let list: UnrolledList<usize, 8> = (0..n).collect();
        let chunks: Vec<&[usize]> = list.chunks().collect();
        prop_assert_eq!(chunks.len(), list.node_count());
        let (tail, rest) = chunks.split_last().unwrap();
        prop_assert!(tail.len() <= 8);
        for chunk in rest {
            prop_assert!((4..=8).contains(&chunk.len()));
        }
        prop_assert_eq!(chunks.concat(), (0..n).collect::<Vec<_>>());
    }

    /// Walking forward then backward visits every element in mirrored order.
    #[test]
    fn cursor_round_trip(n in 1..200i64) {
        let list: UnrolledList<i64, 4> = (0..n).collect();
        let mut cursor = list.begin();
        let mut forward = Vec::new();
        while let Some(&x) = cursor.get() {
            forward.push(x);
            cursor.move_next();
        }
        prop_assert!(cursor.is_end());
        prop_assert_eq!(cursor, list.end());

        let mut backward = Vec::new();
        while cursor != list.begin() {
            cursor.move_prev();
            backward.push(*cursor.get().unwrap());
        }
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward, (0..n).collect::<Vec<_>>());
    }

    /// Mixed front and back consumption never repeats or skips an element.
    #[test]
    fn list_double_ended_consumption(
        n in 0..120usize,
        pattern in prop::collection::vec(any::<bool>(), 0..120),
    ) {
        let list: UnrolledList<usize, 4> = (0..n).collect();
        let mut it = list.iter();
        let (mut lo, mut hi) = (0, n);
        for from_front in pattern {
            prop_assert_eq!(it.len(), hi - lo);
            if from_front {
                let got = it.next().copied();
                prop_assert_eq!(got, (lo < hi).then_some(lo));
                lo = (lo + 1).min(hi);
            } else {
                let got = it.next_back().copied();
                prop_assert_eq!(got, (lo < hi).then(|| hi - 1));
                hi = hi.saturating_sub(1).max(lo);
            }
        }
    }
}
