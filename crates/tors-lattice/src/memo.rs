//! Per-lattice memo tables.
//!
//! Every table belongs to one [`crate::TorsLattice`] and dies with it.
//! Values are computed outside the lock, so a computation may consult other
//! entries of the same table; if two callers race on one key, the first
//! stored value wins and both observe it.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

pub(crate) struct Memo<K, V> {
    table: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Copy, V: Clone> Memo<K, V> {
    pub(crate) fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return value.clone();
        }

        let value = compute();
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
            .clone()
    }
}

impl<K, V> Memo<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").field("entries", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_key() {
        let memo: Memo<u32, u64> = Memo::default();
        let calls = Cell::new(0);
        let square = |n: u32| {
            calls.set(calls.get() + 1);
            u64::from(n) * u64::from(n)
        };

        assert_eq!(memo.get_or_compute(3, || square(3)), 9);
        assert_eq!(memo.get_or_compute(3, || square(3)), 9);
        assert_eq!(memo.get_or_compute(4, || square(4)), 16);
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn computation_may_reenter() {
        let memo: Memo<u32, u32> = Memo::default();
        fn depth(memo: &Memo<u32, u32>, n: u32) -> u32 {
            memo.get_or_compute(n, || if n == 0 { 0 } else { depth(memo, n - 1) + 1 })
        }
        assert_eq!(depth(&memo, 5), 5);
        assert_eq!(memo.len(), 6);
    }
}
