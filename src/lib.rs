//! A SwissTable-style open-addressed hash table with Robin Hood
//! displacement: a single contiguous array of slots, a parallel array of
//! one control byte per slot, and linear probing.
//!
//! The core engine lives in [`table`] and is exposed as [`Table`]. It is a
//! single-owner, in-memory associative container — no persistence, no
//! concurrent access, no deterministic iteration order, and no pluggable
//! hashing; the key type supplies its own hash via `Hash`/`Eq`.
//!
//! ```
//! use robin_table::Table;
//!
//! let mut t = Table::new();
//! t.insert("one", 1);
//! t.insert("two", 2);
//! assert_eq!(t.get("one"), Some(&1));
//! assert_eq!(t.len(), 2);
//! ```

pub mod error;
mod table;

pub use error::{Result, TableError};
pub use table::{Cursor, Table};

/// Construction knobs for a [`Table`].
///
/// The only tunable the core exposes is an initial capacity hint; the
/// target load factor (7/8, spec.md §4.1) is fixed and not part of the
/// public surface, so it has no field here. `TableConfig` exists so the
/// one knob callers do get to set has a documented, `Default`-able home,
/// the way `rusty_db`'s own subsystem configs (e.g. its top-level
/// `Config`) front their construction parameters, rather than a bare
/// `usize` argument.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Minimum number of slots the table should hold before its first
    /// growth. Rounded up to the next power of two, floor 8.
    pub capacity_hint: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { capacity_hint: 8 }
    }
}
