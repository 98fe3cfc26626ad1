//! The closed set of values a store can represent directly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A value in one of the store's native representations.
///
/// This is a closed union: anything a backend persists is one of these kinds.
/// Typed access on top of it is provided by the `Storable` capability in
/// `prefkit-settings`; backends only ever see `NativeValue`.
///
/// All signed integer widths are carried as [`NativeValue::Int`] and all
/// unsigned widths as [`NativeValue::UInt`]; width checking happens on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeValue {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A single-precision float.
    F32(f32),
    /// A double-precision float.
    F64(f64),
    /// A text string.
    Text(String),
    /// An opaque byte blob.
    Bytes(Vec<u8>),
    /// A point in time.
    Timestamp(DateTime<Utc>),
    /// A URL.
    Uri(Url),
    /// A homogeneous sequence of native values.
    Seq(Vec<NativeValue>),
    /// A string-keyed mapping of native values.
    Map(HashMap<String, NativeValue>),
}

impl NativeValue {
    /// The name of this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::Bool(_) => "bool",
            NativeValue::Int(_) => "int",
            NativeValue::UInt(_) => "uint",
            NativeValue::F32(_) => "f32",
            NativeValue::F64(_) => "f64",
            NativeValue::Text(_) => "text",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Timestamp(_) => "timestamp",
            NativeValue::Uri(_) => "uri",
            NativeValue::Seq(_) => "seq",
            NativeValue::Map(_) => "map",
        }
    }
}
