//! # KvTx Testkit
//!
//! Test utilities for KvTx.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - A reference model store for differential testing
//! - Store fixtures and helpers
//!
//! ## Usage
//!
//! ```rust
//! use kvtx_testkit::prelude::*;
//!
//! let store = store_with_committed(&[("a", 1)]);
//! assert_eq!(store.get("a"), Some(1));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
