//! Miscellaneous routines shared by the layout and feature modules.
//!
//! Provides:
//! - ModeCounter, a frequency table with a deterministic mode
//! - Float helpers (truncation, boolean flags, ordered min/max)

use std::hash::Hash;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::params::ModeTieBreak;

/// Truncates toward zero, saturating at the i64 range (NaN maps to 0).
#[inline]
pub fn truncate(value: f64) -> i64 {
    value as i64
}

/// Encodes a boolean as a numeric feature.
#[inline]
pub fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Minimum of a sequence of floats, or None if it is empty.
pub fn min_f64(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().map(OrderedFloat).min().map(|v| v.0)
}

/// Maximum of a sequence of floats, or None if it is empty.
pub fn max_f64(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().map(OrderedFloat).max().map(|v| v.0)
}

/// A frequency table whose mode is chosen deterministically.
///
/// Each key remembers its count and the position at which it was first
/// pushed, so both tie-break rules are available after the fact.
#[derive(Debug, Clone)]
pub struct ModeCounter<K> {
    counts: FxHashMap<K, (usize, usize)>,
    pushed: usize,
}

impl<K: Hash + Eq + Ord> ModeCounter<K> {
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
            pushed: 0,
        }
    }

    /// Records one occurrence of `key`.
    pub fn push(&mut self, key: K) {
        let order = self.pushed;
        self.pushed += 1;
        self.counts
            .entry(key)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, order));
    }

    /// The most frequent key, or None if nothing was pushed.
    pub fn mode(&self, tie_break: ModeTieBreak) -> Option<&K> {
        self.counts
            .iter()
            .max_by(|(key_a, (count_a, order_a)), (key_b, (count_b, order_b))| {
                count_a.cmp(count_b).then_with(|| match tie_break {
                    ModeTieBreak::Smallest => key_b.cmp(key_a),
                    ModeTieBreak::FirstSeen => order_b.cmp(order_a),
                })
            })
            .map(|(key, _)| key)
    }
}

impl<K: Hash + Eq + Ord> Default for ModeCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Ord> Extend<K> for ModeCounter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: Hash + Eq + Ord> FromIterator<K> for ModeCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}
