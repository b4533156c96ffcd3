// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use tensile_test_utils::{Tracked, ledger};

use crate::DynamicArray;

#[derive(Debug, Clone)]
enum Op {
    PushBack(u32),
    PopBack,
    Insert(usize, u32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Truncate(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::PushBack),
        1 => Just(Op::PopBack),
        2 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..48usize).prop_map(Op::Resize),
        1 => (0..64usize).prop_map(Op::Reserve),
        1 => (0..32usize).prop_map(Op::Truncate),
    ]
}

/// Applies `op` to both the array and a `Vec` model. Indices are reduced
/// modulo the valid range; ops that would violate a precondition are skipped.
fn apply(array: &mut DynamicArray<Tracked>, model: &mut Vec<u32>, op: &Op) {
    match *op {
        Op::PushBack(v) => {
            array.push_back(Tracked::new(v)).expect("Failed to push_back(..)");
            model.push(v);
        }
        Op::PopBack => {
            if !model.is_empty() {
                array.pop_back();
                model.pop();
            }
        }
        Op::Insert(i, v) => {
            let index = i % (model.len() + 1);
            let at = array.insert(index, Tracked::new(v)).expect("Failed to insert(..)");
            assert_eq!(at, index);
            model.insert(index, v);
        }
        Op::Erase(i) => {
            if !model.is_empty() {
                let index = i % model.len();
                assert_eq!(array.erase(index), index);
                model.remove(index);
            }
        }
        Op::Resize(n) => {
            array.resize(n).expect("Failed to resize(..)");
            model.resize(n, 0);
        }
        Op::Reserve(n) => {
            array.reserve(n).expect("Failed to reserve(..)");
        }
        Op::Truncate(n) => {
            array.truncate(n);
            model.truncate(n);
        }
    }
}

fn values(array: &DynamicArray<Tracked>) -> Vec<u32> {
    array.iter().map(Tracked::value).collect()
}

proptest! {
    #[test]
    fn operation_sequences_match_vec_model(
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        ledger::reset();

        let mut array = DynamicArray::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut array, &mut model, op);

            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(ledger::live(), model.len());
        }

        prop_assert_eq!(values(&array), model);

        drop(array);
        let snapshot = ledger::snapshot();
        prop_assert_eq!(snapshot.dropped, snapshot.constructed + snapshot.cloned);
    }

    #[test]
    fn push_back_then_pop_back_restores_len(
        initial in prop::collection::vec(any::<u32>(), 0..32),
        value in any::<u32>()
    ) {
        let mut array = DynamicArray::from_slice(&initial).expect("Failed to from_slice(..)");

        array.push_back(value).expect("Failed to push_back(..)");
        prop_assert_eq!(array.len(), initial.len() + 1);
        prop_assert_eq!(array[initial.len()], value);

        array.pop_back();
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn push_back_growth_is_doubling(count in 0..300usize) {
        let mut array = DynamicArray::new();

        for i in 0..count {
            let before = array.capacity();
            array.push_back(i).expect("Failed to push_back(..)");

            if i == before {
                let grown = if before == 0 { 1 } else { 2 * before };
                prop_assert_eq!(array.capacity(), grown);
            } else {
                prop_assert_eq!(array.capacity(), before);
            }
        }

        prop_assert_eq!(array.len(), count);
    }

    #[test]
    fn insert_then_erase_is_identity(
        initial in prop::collection::vec(any::<u32>(), 0..32),
        position in any::<usize>(),
        value in any::<u32>()
    ) {
        let mut array = DynamicArray::from_slice(&initial).expect("Failed to from_slice(..)");
        let index = position % (initial.len() + 1);

        let at = array.insert(index, value).expect("Failed to insert(..)");
        prop_assert_eq!(array[at], value);

        array.erase(at);
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn resize_up_then_down_is_identity(
        initial in prop::collection::vec(any::<u32>(), 0..32),
        extra in 0..32usize
    ) {
        let mut array = DynamicArray::from_slice(&initial).expect("Failed to from_slice(..)");

        array.resize(initial.len() + extra).expect("Failed to resize(..)");
        prop_assert!(array[initial.len()..].iter().all(|v| *v == 0));

        array.resize(initial.len()).expect("Failed to resize(..)");
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn reserve_never_shrinks(requests in prop::collection::vec(0..512usize, 1..16)) {
        let mut array = DynamicArray::<u64>::new();
        let mut expected = 0;

        for request in requests {
            array.reserve(request).expect("Failed to reserve(..)");
            expected = expected.max(request);

            prop_assert_eq!(array.capacity(), expected);
        }
    }

    #[test]
    fn clone_is_independent_and_tight(
        initial in prop::collection::vec(any::<u32>(), 0..32),
        reserve in 0..64usize
    ) {
        let mut array = DynamicArray::from_slice(&initial).expect("Failed to from_slice(..)");
        array.reserve(reserve).expect("Failed to reserve(..)");

        let mut copy = array.clone();
        prop_assert_eq!(&copy, &array);
        prop_assert_eq!(copy.capacity(), initial.len());

        copy.push_back(0).expect("Failed to push_back(..)");
        prop_assert_eq!(array.as_slice(), initial.as_slice());
    }

    #[test]
    fn clone_from_matches_source(
        target in prop::collection::vec(any::<u32>(), 0..32),
        source in prop::collection::vec(any::<u32>(), 0..32),
        target_reserve in 0..64usize
    ) {
        let mut target = DynamicArray::from_slice(&target).expect("Failed to from_slice(..)");
        target.reserve(target_reserve).expect("Failed to reserve(..)");
        let source = DynamicArray::from_slice(&source).expect("Failed to from_slice(..)");

        target.clone_from(&source);

        prop_assert_eq!(&target, &source);
        prop_assert!(target.capacity() >= source.len());
    }
}
