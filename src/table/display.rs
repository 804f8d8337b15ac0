//! Human-readable rendering: `{k1: v1, k2: v2, ...}`, empty table as `{}`.

use super::Table;
use std::fmt;

impl<K, V> fmt::Display for Table<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        f.write_str("}")
    }
}
