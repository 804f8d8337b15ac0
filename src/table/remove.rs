//! Tombstone-marking deletion.

use super::slot;
use super::Table;
use std::borrow::Borrow;
use std::hash::Hash;
use std::ptr;

impl<K, V> Table<K, V>
where
    K: Hash + Eq,
{
    /// Removes `key`, returning its value if it was present.
    ///
    /// On a miss this is a no-op: `size` is left untouched. On a hit, the
    /// slot's control byte becomes TOMBSTONE rather than EMPTY, since the
    /// slot may still be part of a probe chain for other keys that walked
    /// through it; growth periodically reclaims tombstones wholesale.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_slot(key)?;
        self.ctrl[index] = slot::TOMBSTONE;
        let entry = unsafe { ptr::read(self.slots[index].as_ptr()) };
        self.size -= 1;
        Some(entry.value)
    }
}
