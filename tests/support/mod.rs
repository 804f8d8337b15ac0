//! Shared helpers for integration tests.

use std::hash::{Hash, Hasher};

/// A key whose hash depends only on `bucket`. Any two `CollidingKey`s built
/// from the same bucket land on the same ideal slot no matter what a given
/// table's per-instance hash seed happens to be — raw integer keys can't
/// make that guarantee, since `Table` mixes a random seed into every hash
/// before the key's own bytes are folded in. `id` still participates in
/// equality, so keys sharing a bucket remain distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollidingKey {
    bucket: u64,
    id: u64,
}

impl CollidingKey {
    pub fn new(bucket: u64, id: u64) -> Self {
        Self { bucket, id }
    }
}

impl Hash for CollidingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bucket.hash(state);
    }
}
