//! Insertion and Robin Hood displacement.

use super::place::{displace, place};
use super::probe::{distance, ProbeSeq};
use super::slot::{self, Entry};
use super::Table;
use std::hash::Hash;
use std::mem;

impl<K, V> Table<K, V>
where
    K: Hash + Eq,
{
    /// Inserts `key` with `value`, returning the previous value if `key`
    /// was already present.
    ///
    /// If the table's size is about to reach its load limit, it grows
    /// first (doubling capacity) before the new entry is placed, so
    /// insertion never fails on capacity.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.size >= self.load_limit {
            self.grow();
        }

        let hash = self.hash_of(&key);
        let h2 = slot::fingerprint(hash);
        let mut seq = ProbeSeq::new(hash, self.mask);

        // The first tombstone seen along the walk is a candidate landing
        // slot, but it cannot be claimed until the rest of the chain is
        // confirmed not to hold the key already: a tombstone only marks a
        // slot that used to be part of a longer occupied run, and entries
        // placed past it while its original occupant was still alive are
        // still live further along.
        let mut reclaim: Option<usize> = None;

        loop {
            let i = seq.index();
            let ctrl = self.ctrl[i];

            if slot::is_empty(ctrl) {
                let target = reclaim.unwrap_or(i);
                place(&mut self.ctrl, &mut self.slots, target, h2, Entry { key, value, hash });
                self.size += 1;
                return None;
            }

            if slot::is_tombstone(ctrl) {
                if reclaim.is_none() {
                    reclaim = Some(i);
                }
                seq.advance();
                continue;
            }

            if ctrl == h2 {
                let entry = unsafe { self.entry(i) };
                if entry.hash == hash && entry.key == key {
                    let slot = unsafe { self.entry_mut(i) };
                    return Some(mem::replace(&mut slot.value, value));
                }
            }

            let occupant = unsafe { self.entry(i) };
            let occupant_distance = distance(i, occupant.hash, self.mask);

            if seq.distance() > occupant_distance {
                let entry = Entry { key, value, hash };
                match reclaim {
                    Some(slot) => place(&mut self.ctrl, &mut self.slots, slot, h2, entry),
                    None => displace(&mut self.ctrl, &mut self.slots, self.mask, i, h2, entry),
                }
                self.size += 1;
                return None;
            }

            if seq.distance() >= self.capacity {
                tracing::warn!(
                    capacity = self.capacity,
                    "probe walk exceeded table capacity during insertion; load bound invariant may be violated"
                );
            }

            seq.advance();
        }
    }
}
