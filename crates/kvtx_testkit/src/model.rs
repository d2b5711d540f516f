//! Reference model for differential testing.
//!
//! `ModelStore` re-implements the store's visible behavior in the most
//! direct way possible, so property tests can drive a real store and the
//! model with the same operation sequence and compare observations.

use std::collections::HashMap;

/// A naive re-implementation of the store semantics.
///
/// Two maps, no counters, no logging. Kept deliberately dumb: any
/// cleverness here would weaken it as an oracle.
#[derive(Debug, Default)]
pub struct ModelStore {
    committed: HashMap<String, i64>,
    pending: Option<HashMap<String, i64>>,
}

impl ModelStore {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible value for `key`: pending first, then committed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        if let Some(pending) = &self.pending {
            if let Some(value) = pending.get(key) {
                return Some(*value);
            }
        }
        self.committed.get(key).copied()
    }

    /// Buffers a write. Returns `false` when no transaction is open.
    pub fn put(&mut self, key: &str, value: i64) -> bool {
        match &mut self.pending {
            Some(pending) => {
                pending.insert(key.to_owned(), value);
                true
            }
            None => false,
        }
    }

    /// Opens a transaction. Returns `false` when one is already open.
    pub fn begin_transaction(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(HashMap::new());
        true
    }

    /// Merges pending writes into committed state. Returns `false` when
    /// no transaction is open.
    pub fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.committed.extend(pending);
                true
            }
            None => false,
        }
    }

    /// Discards pending writes. Returns `false` when no transaction is
    /// open.
    pub fn rollback(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns `true` if a transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of committed keys.
    #[must_use]
    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_follows_transaction_lifecycle() {
        let mut model = ModelStore::new();
        assert!(!model.put("a", 1));
        assert!(model.begin_transaction());
        assert!(!model.begin_transaction());
        assert!(model.put("a", 1));
        assert_eq!(model.get("a"), Some(1));
        assert!(model.rollback());
        assert_eq!(model.get("a"), None);
        assert!(!model.commit());
    }
}
