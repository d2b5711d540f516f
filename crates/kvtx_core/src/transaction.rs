//! Transaction write set.

use std::collections::HashMap;

/// The write set of an open transaction.
///
/// A `Transaction` buffers every `put` issued while it is open. Nothing in
/// it touches committed state: the store merges the write set on commit
/// and drops it on rollback. Writing the same key twice keeps only the
/// later value.
///
/// Only the store constructs transactions; callers observe one indirectly
/// through the store's visibility rules.
#[derive(Debug, Default)]
pub struct Transaction {
    /// Pending writes: key -> value, last write wins.
    writes: HashMap<String, i64>,
}

impl Transaction {
    /// Creates an empty transaction.
    pub(crate) fn new() -> Self {
        Self {
            writes: HashMap::new(),
        }
    }

    /// Records a write, overwriting any earlier write to the same key.
    pub(crate) fn put(&mut self, key: impl Into<String>, value: i64) {
        self.writes.insert(key.into(), value);
    }

    /// Looks up a pending write.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.writes.get(key).copied()
    }

    /// Returns `true` if the transaction has a pending write for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.writes.contains_key(key)
    }

    /// Returns the number of pending writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Returns `true` if no writes are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Consumes the transaction, yielding its write set for the commit
    /// merge.
    pub(crate) fn into_writes(self) -> HashMap<String, i64> {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut txn = Transaction::new();
        txn.put("k", 1);
        txn.put("k", 2);
        assert_eq!(txn.get("k"), Some(2));
        assert_eq!(txn.write_count(), 1);
    }

    #[test]
    fn empty_transaction() {
        let txn = Transaction::new();
        assert!(txn.is_empty());
        assert_eq!(txn.get("missing"), None);
        assert!(!txn.contains_key("missing"));
    }

    #[test]
    fn into_writes_yields_all_pending() {
        let mut txn = Transaction::new();
        txn.put("a", 1);
        txn.put("b", 2);
        let writes = txn.into_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes.get("a"), Some(&1));
        assert_eq!(writes.get("b"), Some(&2));
    }
}
