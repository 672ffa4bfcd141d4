use std::collections::BTreeSet;

use crate::{BitSet, Error};
use proptest::prelude::*;

/// Maximum capacity for property tests. Kept small enough that exhaustive
/// membership checks (0..capacity) are fast.
const MAX_CAPACITY: u32 = 2048;

/// Strategy: generate a (capacity, values) pair with every value in range.
fn arb_set() -> impl Strategy<Value = (u32, Vec<u32>)> {
    (1u32..=MAX_CAPACITY).prop_flat_map(|capacity| {
        proptest::collection::vec(0..capacity, 0..=(capacity.min(256) as usize))
            .prop_map(move |vals| (capacity, vals))
    })
}

/// Build both a BitSet and a reference BTreeSet from the same values.
fn make_pair(capacity: u32, vals: &[u32]) -> (BitSet, BTreeSet<u32>) {
    let set = BitSet::from_values(capacity, vals.iter().copied()).unwrap();
    let model = vals.iter().copied().collect();
    (set, model)
}

fn assert_matches_model(set: &BitSet, model: &BTreeSet<u32>) -> Result<(), TestCaseError> {
    let members: Vec<u32> = set.iter().collect();
    let expected: Vec<u32> = model.iter().copied().collect();
    prop_assert_eq!(members, expected);
    prop_assert_eq!(set.len(), model.len() as u64);
    prop_assert_eq!(set.len(), set.count_ones());
    Ok(())
}

// ===== Construction & queries =====

proptest! {
    #[test]
    fn contains_matches_model((capacity, vals) in arb_set()) {
        let (set, model) = make_pair(capacity, &vals);
        for v in 0..capacity + 64 {
            prop_assert_eq!(
                set.contains(v),
                model.contains(&v),
                "contains({}) mismatch, capacity={}", v, capacity
            );
        }
    }

    #[test]
    fn iter_matches_model((capacity, vals) in arb_set()) {
        let (set, model) = make_pair(capacity, &vals);
        assert_matches_model(&set, &model)?;
        prop_assert_eq!(set.iter().len(), model.len());
    }

    #[test]
    fn first_last_match_model((capacity, vals) in arb_set()) {
        let (set, model) = make_pair(capacity, &vals);
        prop_assert_eq!(set.first(), model.first().copied());
        prop_assert_eq!(set.last(), model.last().copied());
    }
}

// ===== Insert / remove =====

proptest! {
    #[test]
    fn mutations_match_model(
        (capacity, vals) in arb_set(),
        ops in proptest::collection::vec((any::<bool>(), 0u32..MAX_CAPACITY + 64), 0..64),
    ) {
        let (mut set, mut model) = make_pair(capacity, &vals);
        for (insert, v) in ops {
            let result = if insert { set.insert(v) } else { set.remove(v) };
            if v >= capacity {
                let out_of_range = matches!(result, Err(Error::OutOfRange { .. }));
                prop_assert!(out_of_range);
            } else if insert {
                prop_assert_eq!(result.unwrap(), model.insert(v));
            } else {
                prop_assert_eq!(result.unwrap(), model.remove(&v));
            }
            prop_assert_eq!(set.len(), set.count_ones());
        }
        assert_matches_model(&set, &model)?;
    }

    #[test]
    fn insert_is_idempotent((capacity, vals) in arb_set(), v in 0u32..MAX_CAPACITY) {
        let v = v % capacity;
        let (mut once, _) = make_pair(capacity, &vals);
        once.insert(v).unwrap();
        let mut twice = once.clone();
        prop_assert!(!twice.insert(v).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn insert_then_remove_restores((capacity, vals) in arb_set(), v in 0u32..MAX_CAPACITY) {
        let v = v % capacity;
        let (mut set, _) = make_pair(capacity, &vals);
        set.remove(v).unwrap();
        let before = set.clone();
        set.insert(v).unwrap();
        set.remove(v).unwrap();
        prop_assert_eq!(set, before);
    }
}

// ===== Set operations =====

proptest! {
    #[test]
    fn binary_ops_match_model(
        (cap_a, a_vals) in arb_set(),
        (cap_b, b_vals) in arb_set(),
    ) {
        let (a, ma) = make_pair(cap_a, &a_vals);
        let (b, mb) = make_pair(cap_b, &b_vals);
        let wide = cap_a.max(cap_b);

        let union = a.union(&b).unwrap();
        prop_assert_eq!(union.capacity(), wide);
        assert_matches_model(&union, &ma.union(&mb).copied().collect())?;

        let inter = a.intersection(&b).unwrap();
        prop_assert_eq!(inter.capacity(), wide);
        assert_matches_model(&inter, &ma.intersection(&mb).copied().collect())?;

        let diff = a.difference(&b).unwrap();
        prop_assert_eq!(diff.capacity(), cap_a);
        assert_matches_model(&diff, &ma.difference(&mb).copied().collect())?;

        let symd = a.symmetric_difference(&b).unwrap();
        prop_assert_eq!(symd.capacity(), wide);
        assert_matches_model(&symd, &ma.symmetric_difference(&mb).copied().collect())?;
    }

    #[test]
    fn complement_matches_model((capacity, vals) in arb_set()) {
        let (set, model) = make_pair(capacity, &vals);
        let comp = set.complement().unwrap();
        let expected: BTreeSet<u32> = (0..capacity).filter(|v| !model.contains(v)).collect();
        prop_assert_eq!(comp.len(), capacity as u64 - set.len());
        assert_matches_model(&comp, &expected)?;
        prop_assert_eq!(comp.complement().unwrap(), set);
    }

    #[test]
    fn de_morgan(
        (capacity, a_vals) in arb_set(),
        b_vals in proptest::collection::vec(0u32..MAX_CAPACITY, 0..=256usize),
    ) {
        let b_vals: Vec<u32> = b_vals.into_iter().map(|v| v % capacity).collect();
        let (a, _) = make_pair(capacity, &a_vals);
        let (b, _) = make_pair(capacity, &b_vals);

        prop_assert_eq!(!&(&a | &b), &!&a & &!&b);
        prop_assert_eq!(!&(&a & &b), &!&a | &!&b);
    }
}

// ===== Equality & subsets =====

proptest! {
    #[test]
    fn subset_matches_model(
        (cap_a, a_vals) in arb_set(),
        (cap_b, b_vals) in arb_set(),
    ) {
        let (a, ma) = make_pair(cap_a, &a_vals);
        let (b, mb) = make_pair(cap_b, &b_vals);

        prop_assert_eq!(a.is_subset(&b), ma.is_subset(&mb));
        prop_assert_eq!(a.is_superset(&b), ma.is_superset(&mb));
        prop_assert_eq!(a.is_disjoint(&b), ma.is_disjoint(&mb));
        prop_assert_eq!(a.same_members(&b), ma == mb);
        prop_assert_eq!(
            a.is_strict_subset(&b),
            ma.is_subset(&mb) && ma.len() < mb.len()
        );
    }

    #[test]
    fn subset_laws(
        (capacity, a_vals) in arb_set(),
        b_vals in proptest::collection::vec(0u32..MAX_CAPACITY, 0..=64usize),
    ) {
        let (a, _) = make_pair(capacity, &a_vals);
        prop_assert!(a.is_subset(&a));
        prop_assert!(!a.is_strict_subset(&a));

        // Any union with `a` is a superset of it.
        let b_vals: Vec<u32> = b_vals.into_iter().map(|v| v % capacity).collect();
        let (b, _) = make_pair(capacity, &b_vals);
        let ab = a.union(&b).unwrap();
        prop_assert!(a.is_subset(&ab));
        if a.is_subset(&b) && b.is_subset(&a) {
            prop_assert!(a.same_members(&b));
            prop_assert_eq!(&a, &b);
        }
    }
}
