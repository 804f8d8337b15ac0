//! Find-by-key with Robin Hood early termination.

use super::probe::{distance, ProbeSeq};
use super::slot;
use super::Table;
use std::borrow::Borrow;
use std::hash::Hash;

impl<K, V> Table<K, V>
where
    K: Hash + Eq,
{
    /// Returns the index of the slot holding `key`, or `None` if absent.
    ///
    /// Walks the probe sequence from `key`'s ideal slot. An EMPTY control
    /// byte means the key is absent. A matching fingerprint triggers a full
    /// key comparison. Before advancing past any occupant, the walker's
    /// current distance is compared against that occupant's distance: if
    /// the walker has already gone further than an occupant that is closer
    /// to its own ideal slot, Robin Hood monotonicity guarantees the key
    /// cannot appear later, so the walk stops.
    pub(super) fn find_slot<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }

        let hash = self.hash_of(key);
        let h2 = slot::fingerprint(hash);
        let mut seq = ProbeSeq::new(hash, self.mask);

        loop {
            let i = seq.index();
            let ctrl = self.ctrl[i];

            if slot::is_empty(ctrl) {
                return None;
            }

            if slot::is_occupied(ctrl) && ctrl == h2 {
                let entry = unsafe { self.entry(i) };
                if entry.hash == hash && entry.key.borrow() == key {
                    return Some(i);
                }
            }

            if slot::is_occupied(ctrl) {
                let existing = unsafe { self.entry(i) };
                let occupant_distance = distance(i, existing.hash, self.mask);
                if seq.distance() > occupant_distance {
                    return None;
                }
            }

            if seq.distance() >= self.capacity {
                tracing::warn!(
                    capacity = self.capacity,
                    "probe walk exceeded table capacity during lookup; load bound invariant may be violated"
                );
                return None;
            }

            seq.advance();
        }
    }

    /// Returns a reference to the value associated with `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_slot(key)
            .map(|i| &unsafe { self.entry(i) }.value)
    }

    /// Returns a mutable reference to the value associated with `key`, if
    /// present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_slot(key) {
            Some(i) => Some(&mut unsafe { self.entry_mut(i) }.value),
            None => None,
        }
    }

    /// Returns a clone of the value associated with `key`, or `default` if
    /// the key is absent.
    pub fn get_or_default<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        match self.get(key) {
            Some(v) => v.clone(),
            None => default,
        }
    }

    /// Whether `key` is present in the table.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_slot(key).is_some()
    }
}
