//! Type-safe keys for settings storage.

use std::marker::PhantomData;

/// Declare a type-safe settings key.
///
/// This macro is the primary way to create settings keys. It associates
/// a string key name with a value type at compile time.
///
/// # Example
/// ```rust
/// use prefkit_settings::settings_key;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct AppConfig {
///     theme: String,
///     auto_save: bool,
/// }
/// prefkit_settings::storable_via_serde!(AppConfig);
///
/// settings_key!(pub const CONFIG: AppConfig = "app_config");
/// ```
#[macro_export]
macro_rules! settings_key {
    ($vis:vis const $name:ident: $ty:ty = $key:literal) => {
        $vis const $name: $crate::Key<$ty> = $crate::Key::new($key);
    };
}

/// Type-safe key for settings storage.
///
/// Associates a string key name with a value type at compile time,
/// preventing type mismatches while maintaining ergonomic usage.
///
/// Key names are caller-defined and must be unique per store; no collision
/// detection is performed. Use the [`settings_key!`] macro to declare keys.
#[derive(Debug)]
pub struct Key<V> {
    name: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Clone for Key<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Key<V> {}

impl<V> Key<V> {
    /// Create a new type-safe key with the given storage name.
    ///
    /// Panics at compile time if the name is empty.
    pub const fn new(name: &'static str) -> Self {
        assert!(!name.is_empty(), "settings key name must not be empty");
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Get the string key name used for storage.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
