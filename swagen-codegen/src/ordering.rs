//! Deterministic ordering of property and type bags.
//!
//! Schema ingestion preserves input order, which can differ between runs
//! of the upstream tooling. Routing a bag through [`sorted_entries`]
//! before rendering makes generated files diff-stable: two bags with the
//! same keys and values serialize identically no matter how they were
//! originally ordered.

use indexmap::IndexMap;

/// Return a copy of `bag` with entries sorted lexicographically by key.
///
/// The sort is stable and byte-wise on the key, so repeated application
/// is a no-op and the result does not depend on insertion order.
pub fn sorted_entries<V: Clone>(bag: &IndexMap<String, V>) -> IndexMap<String, V> {
    let mut pairs: Vec<(&String, &V)> = bag.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
