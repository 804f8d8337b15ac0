//! Structural equality (spec.md §4.7): same size, and every pair of one
//! table present in the other with an equal value. Capacity and slot
//! layout are not part of the comparison.

use super::Table;
use std::hash::Hash;

impl<K, V> PartialEq for Table<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V> Eq for Table<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}
