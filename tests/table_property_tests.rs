//! Property-based coverage of the quantified invariants in spec.md §8.

use proptest::prelude::*;
use robin_table::Table;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Set(i32, i32),
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Keys are drawn from a small domain so that, across a few hundred ops,
    // the same key is repeatedly set, removed, and reinserted — exercising
    // update-in-place and tombstone-reclaim, not just fresh inserts.
    prop_oneof![
        (0i32..16, any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        (0i32..16).prop_map(Op::Remove),
    ]
}

proptest! {
    /// Property 1: size always equals the number of distinct keys inserted
    /// and not subsequently removed, for any sequence of set/remove ops.
    #[test]
    fn size_matches_the_reference_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut table = Table::new();
        let mut model: HashMap<i32, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    table.insert(k, v);
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    table.remove(&k);
                    model.remove(&k);
                }
            }
        }

        prop_assert_eq!(table.size(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.get(k), Some(v));
        }
    }

    /// Property 2: get always returns the most recently set value.
    #[test]
    fn get_returns_most_recent_value(
        key in any::<i32>(),
        values in prop::collection::vec(any::<i32>(), 1..20),
    ) {
        let mut table = Table::new();
        for &v in &values {
            table.insert(key, v);
        }
        prop_assert_eq!(table.get(&key), values.last());
    }

    /// Property 4: growth preserves size and every key's most recent value.
    #[test]
    fn growth_preserves_all_entries(n in 20usize..200) {
        let mut table = Table::with_capacity(8);
        for i in 0..n as i64 {
            table.insert(i, i * 3);
        }
        prop_assert_eq!(table.size(), n);
        for i in 0..n as i64 {
            prop_assert_eq!(table.get(&i), Some(&(i * 3)));
        }
    }

    /// Property 5: round-trip through from_pairs keeps the last value per
    /// distinct key and iterates every surviving pair exactly once.
    #[test]
    fn from_pairs_round_trips_last_value_per_key(
        pairs in prop::collection::vec((0i32..50, any::<i32>()), 0..300),
    ) {
        let mut model: HashMap<i32, i32> = HashMap::new();
        for &(k, v) in &pairs {
            model.insert(k, v);
        }

        let table = Table::from_pairs(pairs);

        prop_assert_eq!(table.size(), model.len());
        let mut seen = std::collections::HashSet::new();
        for (k, v) in table.iter() {
            prop_assert_eq!(Some(v), model.get(k));
            prop_assert!(seen.insert(*k));
        }
        prop_assert_eq!(seen.len(), model.len());
    }

    /// Property 6: structural equality is reflexive, symmetric, and
    /// independent of insertion order and capacity.
    #[test]
    fn equality_is_reflexive_symmetric_and_order_independent(
        pairs in prop::collection::vec((0i32..30, any::<i32>()), 0..50),
    ) {
        let forward = Table::from_pairs(pairs.clone());
        let mut reversed_pairs = pairs.clone();
        reversed_pairs.reverse();
        let reversed = Table::from_pairs(reversed_pairs);

        prop_assert_eq!(&forward, &forward);
        prop_assert_eq!(forward == reversed, reversed == forward);
        prop_assert_eq!(&forward, &reversed);
    }

    /// Property 7: clear restores a table to the same observable state as
    /// a freshly constructed table of the same capacity.
    #[test]
    fn clear_matches_a_fresh_table(pairs in prop::collection::vec((0i32..30, any::<i32>()), 0..50)) {
        let mut table = Table::from_pairs(pairs);
        let capacity = table.capacity();
        table.clear();

        let fresh: Table<i32, i32> = Table::with_capacity(capacity);
        prop_assert_eq!(table.size(), fresh.size());
        prop_assert_eq!(table.capacity(), fresh.capacity());
        prop_assert!(table.is_empty());
        prop_assert_eq!(table, fresh);
    }
}
