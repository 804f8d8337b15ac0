//! Capacity doubling and tombstone-discarding rehash.

use super::place::{displace, place};
use super::probe::{distance, ProbeSeq};
use super::slot::{self, Entry};
use super::Table;
use std::hash::Hash;
use std::mem::MaybeUninit;
use std::ptr;

impl<K, V> Table<K, V>
where
    K: Hash + Eq,
{
    /// Doubles capacity and reinserts every live entry using its cached
    /// hash (the key is never re-hashed). Tombstones are discarded.
    ///
    /// The new `ctrl`/`slots` arrays are allocated, zeroed to EMPTY, and
    /// fully populated by reinsertion before they are written into `self` —
    /// growth never exposes a half-migrated table, because until the final
    /// assignment there is no `Table` wrapping the new arrays at all (a
    /// `Table` cannot have its fields partially replaced once built, since
    /// it carries a `Drop` impl).
    pub(super) fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity * 2;
        let new_mask = new_capacity - 1;

        let mut new_ctrl = vec![slot::EMPTY; new_capacity];
        let mut new_slots = Vec::with_capacity(new_capacity);
        new_slots.resize_with(new_capacity, MaybeUninit::uninit);
        let mut new_size = 0usize;

        let mut discarded_tombstones = 0usize;
        for i in 0..old_capacity {
            let ctrl = self.ctrl[i];
            if slot::is_occupied(ctrl) {
                let entry = unsafe { ptr::read(self.slots[i].as_ptr()) };
                reinsert(&mut new_ctrl, &mut new_slots, new_mask, &mut new_size, entry);
            } else if slot::is_tombstone(ctrl) {
                discarded_tombstones += 1;
            }
        }

        tracing::debug!(
            old_capacity,
            new_capacity,
            discarded_tombstones,
            live_entries = new_size,
            "table grown"
        );

        // Every old slot has either been moved out of (occupied, via the
        // ptr::read above) or never held a value (empty/tombstone), so it
        // is safe to simply drop the old `ctrl`/`slots` vectors here by
        // overwriting them — there is nothing left in them to double-drop.
        self.ctrl = new_ctrl;
        self.slots = new_slots;
        self.capacity = new_capacity;
        self.mask = new_mask;
        self.load_limit = (new_capacity * super::LOAD_FACTOR_NUM) >> super::LOAD_FACTOR_SHIFT;
        self.size = new_size;
    }
}

/// Inserts an entry whose hash is already known into a raw slot array,
/// using the full insertion algorithm without recomputing the hash. Used
/// only during growth, where every entry is new to the destination array
/// by construction (no update-in-place case is possible).
fn reinsert<K, V>(
    ctrl: &mut [u8],
    slots: &mut [MaybeUninit<Entry<K, V>>],
    mask: usize,
    size: &mut usize,
    entry: Entry<K, V>,
) {
    let h2 = slot::fingerprint(entry.hash);
    let mut seq = ProbeSeq::new(entry.hash, mask);

    loop {
        let i = seq.index();
        let c = ctrl[i];

        if slot::is_available(c) {
            place(ctrl, slots, i, h2, entry);
            *size += 1;
            return;
        }

        let occupant = unsafe { &*slots[i].as_ptr() };
        let occupant_distance = distance(i, occupant.hash, mask);

        if seq.distance() > occupant_distance {
            displace(ctrl, slots, mask, i, h2, entry);
            *size += 1;
            return;
        }

        seq.advance();
    }
}
