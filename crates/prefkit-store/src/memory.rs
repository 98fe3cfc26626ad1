//! In-memory store backend.

use std::{collections::HashMap, sync::RwLock};

use crate::{NativeValue, Store, StoreError};

/// A store backed by an in-process map.
///
/// Values do not survive the process; this backend is intended for tests and
/// for callers that want settings semantics without persistence. All
/// operations are infallible.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, NativeValue>>,
}

impl MemoryStore {
    /// Creates a new empty `MemoryStore`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn raw_get(&self, key: &str) -> Result<Option<NativeValue>, StoreError> {
        Ok(self
            .values
            .read()
            .expect("RwLock should not be poisoned")
            .get(key)
            .cloned())
    }

    fn raw_set(&self, key: &str, value: NativeValue) -> Result<(), StoreError> {
        self.values
            .write()
            .expect("RwLock should not be poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    fn raw_remove(&self, key: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .expect("RwLock should not be poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();

        assert_eq!(store.raw_get("missing").expect("get"), None);

        store
            .raw_set("answer", NativeValue::Int(42))
            .expect("set succeeds");
        assert_eq!(
            store.raw_get("answer").expect("get"),
            Some(NativeValue::Int(42))
        );

        store.raw_remove("answer").expect("remove succeeds");
        assert_eq!(store.raw_get("answer").expect("get"), None);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.raw_remove("never-set").expect("remove succeeds");
        store.raw_remove("never-set").expect("still succeeds");
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store
            .raw_set("k", NativeValue::Text("old".to_string()))
            .expect("set");
        store
            .raw_set("k", NativeValue::Text("new".to_string()))
            .expect("set");
        assert_eq!(
            store.raw_get("k").expect("get"),
            Some(NativeValue::Text("new".to_string()))
        );
    }
}
