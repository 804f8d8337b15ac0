//! The crate's error type.
//!
//! `Table`'s public surface is total: lookup and removal report absence
//! through `Option`, and insertion never fails on capacity because growth
//! is performed eagerly (spec.md §7). The only fault the core acknowledges
//! is allocation failure during growth, which Rust's global allocator
//! already turns into a process abort for the `Vec` operations this crate
//! uses. `TableError` exists so that contract has a type to live in, for
//! the fallible constructor that documents it.

use thiserror::Error;

/// The single fault `Table` construction can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The requested capacity, rounded up to the next power of two, would
    /// overflow `usize`.
    #[error("requested capacity overflows usize")]
    CapacityOverflow,
}

/// Convenience alias, mirroring the crate's one fallible entry point.
pub type Result<T> = std::result::Result<T, TableError>;
