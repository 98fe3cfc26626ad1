//! The store trait consumed by the settings facade.

use crate::NativeValue;

/// An error resulting from operations on a store backend.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// An internal unspecified error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A serialization or deserialization error in the backend's on-disk format.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// An I/O error in a persistent backend.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A process-wide, string-keyed store of weakly-typed values.
///
/// This is the external collaborator the settings facade reads and writes
/// through. All operations are synchronous; a backend that is shared between
/// threads is responsible for its own serialization of access.
pub trait Store: Send + Sync {
    /// Retrieves the raw value stored under `key`, if any.
    fn raw_get(&self, key: &str) -> Result<Option<NativeValue>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn raw_set(&self, key: &str, value: NativeValue) -> Result<(), StoreError>;

    /// Deletes the slot under `key`. Removing an absent key is a no-op.
    fn raw_remove(&self, key: &str) -> Result<(), StoreError>;
}
