//! The capability a value type needs to be persisted in a store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use prefkit_store::NativeValue;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DecodeError, EncodeError};

/// A value type that can be persisted in a [`Store`](prefkit_store::Store).
///
/// Scalars (booleans, fixed-width integers, floats, strings, byte blobs,
/// timestamps, URLs) map directly onto a [`NativeValue`] kind, and sequences,
/// mappings and optionals of storable types are storable themselves. Anything
/// else goes through the structured fallback: use
/// [`storable_via_serde!`](crate::storable_via_serde) for serde types and
/// [`storable_enum!`](crate::storable_enum) for raw-value enums.
pub trait Storable: Sized {
    /// Encode into the store's native representation.
    ///
    /// `Ok(None)` means the value has no stored representation and the slot
    /// should be cleared; only the absent variant of an optional produces it.
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError>;

    /// Decode from the store's native representation.
    fn decode(value: &NativeValue) -> Result<Self, DecodeError>;
}

fn kind_mismatch(expected: &'static str, actual: &NativeValue) -> DecodeError {
    DecodeError::KindMismatch {
        expected,
        actual: actual.kind(),
    }
}

impl Storable for bool {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::Bool(*self)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Bool(b) => Ok(*b),
            other => Err(kind_mismatch("bool", other)),
        }
    }
}

// Every fixed integer width funnels through the Int/UInt native kinds; decode
// checks that the stored value fits the target width instead of truncating.
macro_rules! storable_signed_int {
    ($($ty:ty),+) => {$(
        impl Storable for $ty {
            fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
                Ok(Some(NativeValue::Int(i64::from(*self))))
            }

            fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
                match value {
                    NativeValue::Int(raw) => <$ty>::try_from(*raw)
                        .map_err(|_| DecodeError::OutOfRange { target: stringify!($ty) }),
                    other => Err(kind_mismatch("int", other)),
                }
            }
        }
    )+};
}

macro_rules! storable_unsigned_int {
    ($($ty:ty),+) => {$(
        impl Storable for $ty {
            fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
                Ok(Some(NativeValue::UInt(u64::from(*self))))
            }

            fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
                match value {
                    NativeValue::UInt(raw) => <$ty>::try_from(*raw)
                        .map_err(|_| DecodeError::OutOfRange { target: stringify!($ty) }),
                    other => Err(kind_mismatch("uint", other)),
                }
            }
        }
    )+};
}

storable_signed_int!(i8, i16, i32, i64);
storable_unsigned_int!(u8, u16, u32, u64);

impl Storable for f32 {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::F32(*self)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::F32(f) => Ok(*f),
            other => Err(kind_mismatch("f32", other)),
        }
    }
}

impl Storable for f64 {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::F64(*self)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::F64(f) => Ok(*f),
            other => Err(kind_mismatch("f64", other)),
        }
    }
}

impl Storable for String {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::Text(self.clone())))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Text(s) => Ok(s.clone()),
            other => Err(kind_mismatch("text", other)),
        }
    }
}

impl Storable for DateTime<Utc> {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::Timestamp(*self)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Timestamp(ts) => Ok(*ts),
            other => Err(kind_mismatch("timestamp", other)),
        }
    }
}

impl Storable for Url {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::Uri(self.clone())))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Uri(url) => Ok(url.clone()),
            other => Err(kind_mismatch("uri", other)),
        }
    }
}

/// An opaque byte blob.
///
/// `Vec<u8>` already stores as a sequence of integers through the generic
/// sequence impl, so byte blobs get their own wrapper that maps onto the
/// store's `bytes` kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    /// Consume the blob, returning the inner bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Storable for Blob {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        Ok(Some(NativeValue::Bytes(self.0.clone())))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Bytes(bytes) => Ok(Blob(bytes.clone())),
            other => Err(kind_mismatch("bytes", other)),
        }
    }
}

impl<T: Storable> Storable for Vec<T> {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            match item.encode()? {
                Some(native) => items.push(native),
                None => return Err(EncodeError::NestedAbsent),
            }
        }
        Ok(Some(NativeValue::Seq(items)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Seq(items) => items.iter().map(T::decode).collect(),
            other => Err(kind_mismatch("seq", other)),
        }
    }
}

impl<T: Storable> Storable for HashMap<String, T> {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        let mut entries = HashMap::with_capacity(self.len());
        for (key, item) in self {
            match item.encode()? {
                Some(native) => {
                    entries.insert(key.clone(), native);
                }
                None => return Err(EncodeError::NestedAbsent),
            }
        }
        Ok(Some(NativeValue::Map(entries)))
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        match value {
            NativeValue::Map(entries) => entries
                .iter()
                .map(|(key, item)| Ok((key.clone(), T::decode(item)?)))
                .collect(),
            other => Err(kind_mismatch("map", other)),
        }
    }
}

// Optionality is presence or absence of the slot, never a stored null marker:
// the absent variant encodes to `None`, which the accessor turns into a remove.
impl<T: Storable> Storable for Option<T> {
    fn encode(&self) -> Result<Option<NativeValue>, EncodeError> {
        match self {
            Some(value) => value.encode(),
            None => Ok(None),
        }
    }

    fn decode(value: &NativeValue) -> Result<Self, DecodeError> {
        T::decode(value).map(Some)
    }
}

/// Make a serde type storable through the structured fallback encoding.
///
/// The value is serialized to JSON and stored as a byte blob; reading performs
/// the inverse decode. Use this for record types that have no direct native
/// representation.
///
/// # Example
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct WindowFrame {
///     width: u32,
///     height: u32,
/// }
///
/// prefkit_settings::storable_via_serde!(WindowFrame);
/// ```
#[macro_export]
macro_rules! storable_via_serde {
    ($ty:ty) => {
        impl $crate::Storable for $ty {
            fn encode(
                &self,
            ) -> ::core::result::Result<
                ::core::option::Option<$crate::NativeValue>,
                $crate::EncodeError,
            > {
                let bytes = $crate::__private::serde_json::to_vec(self)
                    .map_err($crate::EncodeError::Serialization)?;
                Ok(Some($crate::NativeValue::Bytes(bytes)))
            }

            fn decode(
                value: &$crate::NativeValue,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                match value {
                    $crate::NativeValue::Bytes(bytes) => {
                        $crate::__private::serde_json::from_slice(bytes)
                            .map_err($crate::DecodeError::Deserialization)
                    }
                    other => Err($crate::DecodeError::KindMismatch {
                        expected: "bytes",
                        actual: other.kind(),
                    }),
                }
            }
        }
    };
}

/// Declare an enum stored through its raw integer value.
///
/// The enum's discriminant is what ends up in the store; decoding looks the
/// raw value back up and fails with
/// [`DecodeError::UnknownRawValue`](crate::DecodeError::UnknownRawValue) if it
/// no longer maps to a case.
///
/// # Example
/// ```rust
/// prefkit_settings::storable_enum! {
///     /// The app's color scheme.
///     pub enum Theme: i64 {
///         /// Follow the system appearance.
///         System = 0,
///         /// Always light.
///         Light = 1,
///         /// Always dark.
///         Dark = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! storable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::Storable for $name {
            fn encode(
                &self,
            ) -> ::core::result::Result<
                ::core::option::Option<$crate::NativeValue>,
                $crate::EncodeError,
            > {
                <$raw as $crate::Storable>::encode(&(*self as $raw))
            }

            fn decode(
                value: &$crate::NativeValue,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                let raw = <$raw as $crate::Storable>::decode(value)?;
                $(
                    if raw == $value {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::DecodeError::UnknownRawValue {
                    target: stringify!($name),
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_round_trip() {
        fn round_trip<T: Storable + PartialEq + std::fmt::Debug>(value: T) {
            let native = value.encode().expect("encodes").expect("is present");
            assert_eq!(T::decode(&native).expect("decodes"), value);
        }

        round_trip(true);
        round_trip(-42i8);
        round_trip(-12345i16);
        round_trip(-1234567i32);
        round_trip(-123456789012i64);
        round_trip(42u8);
        round_trip(12345u16);
        round_trip(1234567u32);
        round_trip(123456789012u64);
        round_trip(1.5f32);
        round_trip(2.25f64);
        round_trip("hello".to_string());
        round_trip(Blob(vec![0, 1, 2, 255]));
        round_trip(Utc::now());
        round_trip(Url::parse("https://example.com/path").expect("valid url"));
    }

    #[test]
    fn composites_round_trip() {
        let seq = vec![1u32, 2, 3];
        let native = seq.encode().expect("encodes").expect("is present");
        assert_eq!(Vec::<u32>::decode(&native).expect("decodes"), seq);

        let map = HashMap::from([("a".to_string(), true), ("b".to_string(), false)]);
        let native = map.encode().expect("encodes").expect("is present");
        assert_eq!(
            HashMap::<String, bool>::decode(&native).expect("decodes"),
            map
        );
    }

    #[test]
    fn integer_decode_checks_width() {
        let native = NativeValue::Int(300);
        assert!(matches!(
            i8::decode(&native),
            Err(DecodeError::OutOfRange { target: "i8" })
        ));
        assert_eq!(i16::decode(&native).expect("fits"), 300);

        let native = NativeValue::UInt(70000);
        assert!(matches!(
            u16::decode(&native),
            Err(DecodeError::OutOfRange { target: "u16" })
        ));
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let native = NativeValue::Text("not a bool".to_string());
        assert!(matches!(
            bool::decode(&native),
            Err(DecodeError::KindMismatch {
                expected: "bool",
                actual: "text"
            })
        ));
    }

    #[test]
    fn absent_optional_encodes_to_nothing() {
        let value: Option<u32> = None;
        assert!(value.encode().expect("encodes").is_none());

        let value: Option<u32> = Some(7);
        assert_eq!(
            value.encode().expect("encodes"),
            Some(NativeValue::UInt(7))
        );
    }

    #[test]
    fn nested_absent_optional_fails_encode() {
        let values: Vec<Option<u32>> = vec![Some(1), None];
        assert!(matches!(
            values.encode(),
            Err(EncodeError::NestedAbsent)
        ));
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Frame {
        width: u32,
        height: u32,
    }
    storable_via_serde!(Frame);

    #[test]
    fn serde_fallback_stores_as_bytes() {
        let frame = Frame {
            width: 800,
            height: 600,
        };
        let native = frame.encode().expect("encodes").expect("is present");
        assert_eq!(native.kind(), "bytes");
        assert_eq!(Frame::decode(&native).expect("decodes"), frame);
    }

    #[test]
    fn serde_fallback_rejects_undecodable_blob() {
        let native = NativeValue::Bytes(b"not json".to_vec());
        assert!(matches!(
            Frame::decode(&native),
            Err(DecodeError::Deserialization(_))
        ));
    }

    storable_enum! {
        enum Theme: i64 {
            System = 0,
            Light = 1,
            Dark = 2,
        }
    }

    #[test]
    fn raw_value_enum_round_trips() {
        let native = Theme::Dark.encode().expect("encodes").expect("is present");
        assert_eq!(native, NativeValue::Int(2));
        assert_eq!(Theme::decode(&native).expect("decodes"), Theme::Dark);
    }

    #[test]
    fn raw_value_enum_rejects_unknown_raw() {
        let native = NativeValue::Int(99);
        assert!(matches!(
            Theme::decode(&native),
            Err(DecodeError::UnknownRawValue { target: "Theme" })
        ));
    }
}
