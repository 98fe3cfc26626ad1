//! JSON-file-backed store backend.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use crate::{NativeValue, Store, StoreError};

/// A store persisted as a single JSON file.
///
/// The whole map is loaded at open and rewritten on every mutation, which is
/// acceptable for settings-sized data. The on-disk format is an object keyed
/// by slot name, values in the `NativeValue` serde representation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, NativeValue>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty one if the file does not
    /// exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn persist(&self, values: &HashMap<String, NativeValue>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn raw_get(&self, key: &str) -> Result<Option<NativeValue>, StoreError> {
        Ok(self
            .values
            .read()
            .expect("RwLock should not be poisoned")
            .get(key)
            .cloned())
    }

    fn raw_set(&self, key: &str, value: NativeValue) -> Result<(), StoreError> {
        let mut values = self.values.write().expect("RwLock should not be poisoned");
        values.insert(key.to_string(), value);
        self.persist(&values)
    }

    fn raw_remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().expect("RwLock should not be poisoned");
        if values.remove(key).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }
}
