#![doc = include_str!("../README.md")]

mod diagnostics;
mod error;
mod key;
mod setting;
mod storable;

pub use diagnostics::{DiagnosticsSink, TracingSink};
pub use error::{DecodeError, EncodeError, SettingsError};
pub use key::Key;
// Re-exported so the declaration macros can name it via `$crate`.
pub use prefkit_store::NativeValue;
pub use setting::Setting;
pub use storable::{Blob, Storable};

/// This code is not meant to be used directly; it backs the
/// [`storable_via_serde!`](crate::storable_via_serde) macro expansion.
#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
