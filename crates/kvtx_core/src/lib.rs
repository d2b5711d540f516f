//! # KvTx Core
//!
//! A single-writer, in-memory key-value store with one level of
//! deferred-commit transaction isolation.
//!
//! This crate provides:
//! - The [`Store`] facade: `get`, `put`, `begin_transaction`, `commit`,
//!   `rollback`
//! - A buffered [`Transaction`] write set, merged into committed state on
//!   commit and discarded on rollback
//! - Typed errors for precondition violations
//! - Operation counters for diagnostics
//!
//! Writes are always provisional: `put` is only legal inside an open
//! transaction, and nothing becomes visible to later non-transactional
//! reads until `commit`. Reads issued while a transaction is open see that
//! transaction's own pending writes.
//!
//! ```rust
//! use kvtx_core::Store;
//!
//! let mut store = Store::new();
//! assert_eq!(store.get("a"), None);
//!
//! store.begin_transaction()?;
//! store.put("a", 5)?;
//! store.put("a", 6)?;
//! store.commit()?;
//! assert_eq!(store.get("a"), Some(6));
//! # Ok::<(), kvtx_core::StoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod stats;
mod store;
mod transaction;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;
pub use transaction::Transaction;
