//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random keys, values, and operation
//! sequences to drive a store and the reference model side by side.

use proptest::prelude::*;

/// A single store operation, as generated for sequence tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Read a key.
    Get(String),
    /// Write a key inside the open transaction, if any.
    Put(String, i64),
    /// Open a transaction.
    Begin,
    /// Merge and close the open transaction, if any.
    Commit,
    /// Discard the open transaction, if any.
    Rollback,
}

/// Strategy for generating store keys.
///
/// A small alphabet on purpose: collisions between operations are what
/// make sequences interesting.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e][0-9]?").expect("Invalid regex")
}

/// Strategy for generating store values.
pub fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Strategy for generating a single operation.
///
/// Weighted toward gets and puts so transactions accumulate writes before
/// they close.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => key_strategy().prop_map(Op::Get),
        4 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => Just(Op::Begin),
        2 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Strategy for generating operation sequences.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}
