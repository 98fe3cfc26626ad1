//! Error taxonomy for the settings facade.
//!
//! None of these errors ever reaches a caller of [`Setting`](crate::Setting):
//! they are caught at the accessor boundary and routed to the configured
//! [`DiagnosticsSink`](crate::DiagnosticsSink). An absent key is not an error
//! at all; it silently yields the default value.

use prefkit_store::StoreError;
use thiserror::Error;

/// A stored native value is present but not convertible to the target type.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The native value has a different kind than the target type expects.
    #[error("native value has kind '{actual}', expected '{expected}'")]
    KindMismatch {
        /// The kind the target type decodes from.
        expected: &'static str,
        /// The kind actually found in the store.
        actual: &'static str,
    },

    /// The stored integer does not fit the target width.
    #[error("stored value is out of range for {target}")]
    OutOfRange {
        /// The target integer type.
        target: &'static str,
    },

    /// The stored raw value no longer maps to a known enum case.
    #[error("stored raw value does not map to a known case of {target}")]
    UnknownRawValue {
        /// The target enum type.
        target: &'static str,
    },

    /// A stored blob did not deserialize as the target type.
    #[error(transparent)]
    Deserialization(#[from] serde_json::Error),
}

/// A value could not be encoded into a native representation.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Serialization on the structured fallback path failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// An absent optional can only appear at the top level of a setting,
    /// where it clears the slot; it has no representation inside a sequence
    /// or mapping.
    #[error("absent optional values cannot be nested inside a composite value")]
    NestedAbsent,
}

/// An error swallowed at the settings accessor boundary.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The stored value did not decode as the setting's type.
    #[error("Failed to decode setting '{key}': {source}")]
    DecodeMismatch {
        /// The key of the affected setting.
        key: &'static str,
        /// The underlying decode failure.
        source: DecodeError,
    },

    /// The new value did not encode into a native representation.
    #[error("Failed to encode setting '{key}': {source}")]
    EncodeFailure {
        /// The key of the affected setting.
        key: &'static str,
        /// The underlying encode failure.
        source: EncodeError,
    },

    /// The store backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
