//! The store facade.

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::stats::{StatsSnapshot, StoreStats};
use crate::transaction::Transaction;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A single-writer, in-memory key-value store with deferred-commit
/// transactions.
///
/// The store owns two mappings: the committed state, and an optional
/// pending write set representing the one in-flight transaction. A
/// transaction is open exactly when the pending set exists; `put` is only
/// legal inside one, and its writes stay invisible to later reads until
/// `commit` merges them. `rollback` discards them.
///
/// Visibility for `get`: the pending value when a transaction is open and
/// has written the key (reads see the transaction's own writes),
/// otherwise the committed value, otherwise absent.
///
/// Mutating operations take `&mut self`, so a `Store` has exactly one
/// writer by construction. For concurrent callers the whole store would
/// have to sit behind a single lock; sharing is deliberately out of scope.
///
/// # Example
///
/// ```rust
/// use kvtx_core::{Store, StoreError};
///
/// let mut store = Store::new();
/// assert_eq!(store.put("a", 5), Err(StoreError::NoActiveTransaction));
///
/// store.begin_transaction()?;
/// store.put("a", 5)?;
/// store.rollback()?;
/// assert_eq!(store.get("a"), None);
/// # Ok::<(), StoreError>(())
/// ```
#[derive(Debug)]
pub struct Store {
    /// Committed key-value pairs. Mutated only by `commit`.
    committed: HashMap<String, i64>,
    /// The in-flight transaction. `Some` iff a transaction is open.
    txn: Option<Transaction>,
    /// Operation counters.
    stats: StoreStats,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            committed: HashMap::with_capacity(config.initial_capacity),
            txn: None,
            stats: StoreStats::default(),
        }
    }

    /// Returns the value visible for `key`, or `None` if absent.
    ///
    /// While a transaction is open, its pending write for `key` (the
    /// latest one, if the key was written more than once) takes precedence
    /// over the committed value. Never fails and has no side effects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.stats.record_read();
        let value = match &self.txn {
            Some(txn) if txn.contains_key(key) => txn.get(key),
            _ => self.committed.get(key).copied(),
        };
        trace!(key, ?value, "get");
        value
    }

    /// Buffers `key -> value` in the open transaction.
    ///
    /// Committed state is untouched until `commit`. Writing a key already
    /// written in this transaction overwrites the earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] when no transaction is
    /// open. All mutation must happen inside transaction scope.
    pub fn put(&mut self, key: impl Into<String>, value: i64) -> StoreResult<()> {
        let txn = self.txn.as_mut().ok_or(StoreError::NoActiveTransaction)?;
        let key = key.into();
        trace!(key = %key, value, "put");
        txn.put(key, value);
        self.stats.record_write();
        Ok(())
    }

    /// Opens a transaction with an empty write set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionAlreadyActive`] if one is already
    /// open. Transactions do not nest.
    pub fn begin_transaction(&mut self) -> StoreResult<()> {
        if self.txn.is_some() {
            return Err(StoreError::TransactionAlreadyActive);
        }
        debug!("transaction begin");
        self.txn = Some(Transaction::new());
        self.stats.record_begin();
        Ok(())
    }

    /// Merges every pending write into committed state and closes the
    /// transaction.
    ///
    /// Keys not written during the transaction keep their committed
    /// values. Returns the number of writes applied. This is the only path
    /// by which writes become visible outside transaction scope.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] when no transaction is
    /// open. On the error path nothing is mutated.
    pub fn commit(&mut self) -> StoreResult<usize> {
        let txn = self.txn.take().ok_or(StoreError::NoActiveTransaction)?;
        let writes = txn.into_writes();
        let applied = writes.len();
        for (key, value) in writes {
            self.committed.insert(key, value);
        }
        debug!(applied, "transaction commit");
        self.stats.record_commit(applied as u64);
        Ok(applied)
    }

    /// Discards the open transaction without touching committed state.
    ///
    /// Every write made during the transaction vanishes as if never
    /// issued. Returns the number of writes discarded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveTransaction`] when no transaction is
    /// open.
    pub fn rollback(&mut self) -> StoreResult<usize> {
        let txn = self.txn.take().ok_or(StoreError::NoActiveTransaction)?;
        let discarded = txn.write_count();
        debug!(discarded, "transaction rollback");
        self.stats.record_rollback();
        Ok(discarded)
    }

    /// Returns `true` if a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.txn.is_some()
    }

    /// Returns the number of pending writes, or 0 when idle.
    #[must_use]
    pub fn pending_write_count(&self) -> usize {
        self.txn.as_ref().map_or(0, Transaction::write_count)
    }

    /// Returns the number of committed keys.
    ///
    /// Pending writes do not count until committed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if no keys have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns `true` if `key` is visible, under the same rules as
    /// [`Store::get`].
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match &self.txn {
            Some(txn) if txn.contains_key(key) => true,
            _ => self.committed.contains_key(key),
        }
    }

    /// Returns a point-in-time copy of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
