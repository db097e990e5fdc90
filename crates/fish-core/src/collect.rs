//! Grouping helpers for inverting "entity -> related entities" relations
//!
//! Every function here consumes its input in a single pass, so the order of
//! values inside each group is the order in which they were produced.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Group `(key, value)` pairs into `key -> [value]`
pub fn group<K, V, I>(pairs: I) -> BTreeMap<K, Vec<V>>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut result: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for (key, value) in pairs {
        result.entry(key).or_default().push(value);
    }
    result
}

/// Group `(key, value)` pairs, keeping only the first value of each identity per key
pub fn group_dedup<K, V, D, I, F>(pairs: I, identity: F) -> BTreeMap<K, Vec<V>>
where
    K: Ord + Clone,
    D: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
    F: Fn(&V) -> D,
{
    let mut result: BTreeMap<K, Vec<V>> = BTreeMap::new();
    let mut seen: BTreeMap<K, HashSet<D>> = BTreeMap::new();
    for (key, value) in pairs {
        if !seen.entry(key.clone()).or_default().insert(identity(&value)) {
            continue;
        }
        result.entry(key).or_default().push(value);
    }
    result
}

/// Two-level grouping: `(outer, (inner, value))` into `outer -> inner -> [value]`
pub fn group_nested<K1, K2, V, I>(triples: I) -> BTreeMap<K1, BTreeMap<K2, Vec<V>>>
where
    K1: Ord,
    K2: Ord,
    I: IntoIterator<Item = (K1, (K2, V))>,
{
    let mut result: BTreeMap<K1, BTreeMap<K2, Vec<V>>> = BTreeMap::new();
    for (outer, (inner, value)) in triples {
        result
            .entry(outer)
            .or_default()
            .entry(inner)
            .or_default()
            .push(value);
    }
    result
}

/// Drop every value whose identity was already seen (first seen wins)
pub fn dedup_by<V, D, I, F>(values: I, identity: F) -> Vec<V>
where
    D: Eq + Hash,
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> D,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(identity(value)))
        .collect()
}
