//! The core hash table engine: a single contiguous open-addressed array of
//! slots with a parallel control-byte array, and Robin Hood displacement on
//! insertion.
//!
//! See the crate-level documentation for the public surface; this module
//! and its siblings (`probe`, `slot`, `insert`, `lookup`, `remove`, `grow`,
//! `iter`, `eq`, `display`) implement it.

mod display;
mod eq;
mod grow;
mod insert;
mod iter;
mod lookup;
mod place;
mod probe;
mod remove;
mod slot;

pub use iter::Cursor;

use slot::Entry;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ptr;

/// Minimum capacity of any table, and the capacity a zero capacity hint
/// rounds up to.
const MIN_CAPACITY: usize = 8;

/// Target peak load factor, expressed as a fraction of capacity: 7/8.
/// `load_limit` below is `capacity * LOAD_FACTOR_NUM / LOAD_FACTOR_DEN`,
/// computed with a shift since `LOAD_FACTOR_DEN` is a power of two.
const LOAD_FACTOR_NUM: usize = 7;
const LOAD_FACTOR_SHIFT: u32 = 3;

/// A generic, in-memory associative container mapping keys of type `K` to
/// values of type `V`.
///
/// `Table` is a single flat array of slots plus a parallel array of one
/// control byte per slot (see [`slot`]). Lookup, insertion, and deletion all
/// walk a linear probe sequence from a key's ideal slot, consulting only
/// control bytes until a candidate is identified. Insertion uses Robin Hood
/// displacement: a new entry evicts any occupant whose probe distance is
/// smaller than its own, bounding the worst-case probe length.
///
/// `Table` does not implement `Clone`; cloning a flat open-addressed table
/// correctly (including tombstones) offers little over rebuilding it from
/// `iter()`, so callers who need a copy should collect one explicitly.
pub struct Table<K, V> {
    ctrl: Vec<u8>,
    slots: Vec<MaybeUninit<Entry<K, V>>>,
    size: usize,
    capacity: usize,
    mask: usize,
    load_limit: usize,
    seed: u64,
}

impl<K, V> Table<K, V> {
    /// Creates an empty table with the minimum capacity (8).
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty table with room for at least `capacity_hint` slots
    /// before growth is required.
    ///
    /// The hint is rounded up to the next power of two, with a floor of 8:
    /// `0` and `7` both yield capacity 8; `9` yields 16; `1000` yields 1024.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        let capacity = capacity_hint.max(MIN_CAPACITY).next_power_of_two();
        Self::new_with_capacity(capacity)
    }

    /// Fallible counterpart to [`Table::with_capacity`].
    ///
    /// The core never fails under correct use (see the crate's error-handling
    /// notes); this exists so the "growth commits atomically, never exposing
    /// a half-migrated table" contract has a place to be expressed in the
    /// type system, for callers who want to document that contract at their
    /// own call sites rather than relying on the global allocator's abort.
    pub fn try_with_capacity(
        capacity_hint: usize,
    ) -> Result<Self, crate::error::TableError> {
        let capacity = capacity_hint
            .max(MIN_CAPACITY)
            .checked_next_power_of_two()
            .ok_or(crate::error::TableError::CapacityOverflow)?;
        Ok(Self::new_with_capacity(capacity))
    }

    /// Creates an empty table from a [`crate::TableConfig`].
    pub fn with_config(config: crate::TableConfig) -> Self {
        Self::with_capacity(config.capacity_hint)
    }

    fn new_with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(capacity >= MIN_CAPACITY);

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, MaybeUninit::uninit);

        Self {
            ctrl: vec![slot::EMPTY; capacity],
            slots,
            size: 0,
            capacity,
            mask: capacity - 1,
            load_limit: (capacity * LOAD_FACTOR_NUM) >> LOAD_FACTOR_SHIFT,
            seed: fastrand::u64(..),
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Alias for [`Table::len`], matching the spec's `size()` observer.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots backing the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the table holds no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry without shrinking the backing arrays.
    pub fn clear(&mut self) {
        for i in 0..self.capacity {
            if slot::is_occupied(self.ctrl[i]) {
                unsafe {
                    ptr::drop_in_place(self.slots[i].as_mut_ptr());
                }
            }
        }
        self.ctrl.fill(slot::EMPTY);
        self.size = 0;
    }

    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Reads the entry at `index`, which must be OCCUPIED.
    #[inline]
    unsafe fn entry(&self, index: usize) -> &Entry<K, V> {
        &*self.slots[index].as_ptr()
    }

    /// Mutably reads the entry at `index`, which must be OCCUPIED.
    #[inline]
    unsafe fn entry_mut(&mut self, index: usize) -> &mut Entry<K, V> {
        &mut *self.slots[index].as_mut_ptr()
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Table<K, V> {
    fn drop(&mut self) {
        for i in 0..self.capacity {
            if slot::is_occupied(self.ctrl[i]) {
                unsafe {
                    ptr::drop_in_place(self.slots[i].as_mut_ptr());
                }
            }
        }
    }
}

impl<K, V> std::fmt::Debug for Table<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("load_limit", &self.load_limit)
            .finish_non_exhaustive()
    }
}
