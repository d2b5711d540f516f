//! Error types for the KvTx store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store operations.
///
/// Every variant signals a precondition violation; no operation mutates
/// state on its failure path, so callers may retry the correct sequence
/// (for example `begin_transaction` before `put`) without cleanup.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A mutating operation was issued while no transaction is open.
    ///
    /// Returned by `put`, `commit`, and `rollback`.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// `begin_transaction` was called while a transaction is already open.
    ///
    /// Transactions do not nest; at most one is in flight at a time.
    #[error("transaction already active")]
    TransactionAlreadyActive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            StoreError::NoActiveTransaction.to_string(),
            "no active transaction"
        );
        assert_eq!(
            StoreError::TransactionAlreadyActive.to_string(),
            "transaction already active"
        );
    }

    #[test]
    fn errors_are_matchable_values() {
        let err: StoreError = StoreError::NoActiveTransaction;
        match err {
            StoreError::NoActiveTransaction => {}
            StoreError::TransactionAlreadyActive => panic!("wrong variant"),
        }
    }
}
