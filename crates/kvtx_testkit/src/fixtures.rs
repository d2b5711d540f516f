//! Store fixtures for tests.

use kvtx_core::Store;

/// Creates an empty store.
#[must_use]
pub fn fresh_store() -> Store {
    Store::new()
}

/// Creates a store whose committed state holds the given pairs.
///
/// The pairs are applied through a single committed transaction, so the
/// store ends up idle.
#[must_use]
pub fn store_with_committed(pairs: &[(&str, i64)]) -> Store {
    let mut store = Store::new();
    store
        .begin_transaction()
        .expect("fresh store has no open transaction");
    for (key, value) in pairs {
        store.put(*key, *value).expect("transaction is open");
    }
    store.commit().expect("transaction is open");
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_is_idle() {
        let store = store_with_committed(&[("a", 1), ("b", 2)]);
        assert!(!store.in_transaction());
        assert_eq!(store.get("a"), Some(1));
        assert_eq!(store.get("b"), Some(2));
        assert_eq!(store.len(), 2);
    }
}
