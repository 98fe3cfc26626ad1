//! The typed accessor over one store slot.

use std::sync::Arc;

use prefkit_store::Store;

use crate::{DiagnosticsSink, Key, SettingsError, Storable, TracingSink};

/// A typed read/write accessor over one store slot.
///
/// Binds a [`Key`], a default value, and a [`Store`], and hides the store's
/// weak typing behind the caller-specified type `V`. None of the operations
/// can fail from the caller's point of view: decode and encode problems yield
/// the default value (or leave the stored value untouched) and are reported
/// through the [`DiagnosticsSink`].
///
/// The accessor holds no cache; every access round-trips through the store.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
///
/// use prefkit_settings::{settings_key, Setting};
/// use prefkit_store::MemoryStore;
///
/// settings_key!(const USERNAME: String = "username");
///
/// let store = Arc::new(MemoryStore::new());
/// let username = Setting::new(store, USERNAME, String::new());
///
/// assert_eq!(username.get(), "");
/// username.set("ferris".to_string());
/// assert_eq!(username.get(), "ferris");
/// username.remove();
/// assert_eq!(username.get(), "");
/// ```
pub struct Setting<V> {
    key: Key<V>,
    default: V,
    store: Arc<dyn Store>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl<V: Storable + Clone> Setting<V> {
    /// Create an accessor for `key` on `store`, yielding `default` whenever
    /// the slot is absent or undecodable.
    pub fn new(store: Arc<dyn Store>, key: Key<V>, default: V) -> Self {
        Self {
            key,
            default,
            store,
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostics sink swallowed errors are reported to.
    ///
    /// The default sink logs through `tracing`.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The key this accessor is bound to.
    pub fn key(&self) -> &Key<V> {
        &self.key
    }

    /// The value yielded when the slot is absent or undecodable.
    pub fn default(&self) -> &V {
        &self.default
    }

    /// Read the current value.
    ///
    /// An absent slot yields the default. A slot that is present but does not
    /// decode as `V` also yields the default; the failure is reported to the
    /// diagnostics sink, never to the caller.
    pub fn get(&self) -> V {
        let raw = match self.store.raw_get(self.key.name()) {
            Ok(raw) => raw,
            Err(error) => {
                self.diagnostics.report(&SettingsError::Store(error));
                return self.default.clone();
            }
        };

        match raw {
            Some(native) => match V::decode(&native) {
                Ok(value) => value,
                Err(source) => {
                    self.diagnostics.report(&SettingsError::DecodeMismatch {
                        key: self.key.name(),
                        source,
                    });
                    self.default.clone()
                }
            },
            None => self.default.clone(),
        }
    }

    /// Write a new value.
    ///
    /// The write is all-or-nothing: encoding happens before the store is
    /// touched, so an encode failure leaves the previously stored value
    /// unchanged. Writing the absent variant of an optional setting clears
    /// the slot instead of storing a marker.
    pub fn set(&self, value: V) {
        let encoded = match value.encode() {
            Ok(encoded) => encoded,
            Err(source) => {
                self.diagnostics.report(&SettingsError::EncodeFailure {
                    key: self.key.name(),
                    source,
                });
                return;
            }
        };

        let result = match encoded {
            Some(native) => self.store.raw_set(self.key.name(), native),
            None => self.store.raw_remove(self.key.name()),
        };
        if let Err(error) = result {
            self.diagnostics.report(&SettingsError::Store(error));
        }
    }

    /// Delete the slot unconditionally.
    ///
    /// Idempotent; removing an already-absent slot is a no-op. The next
    /// [`get`](Setting::get) yields the default again.
    pub fn remove(&self) {
        if let Err(error) = self.store.raw_remove(self.key.name()) {
            self.diagnostics.report(&SettingsError::Store(error));
        }
    }
}

impl<T: Storable + Clone> Setting<Option<T>> {
    /// Create an accessor for an optional setting with no default: an absent
    /// slot reads as `None`.
    pub fn optional(store: Arc<dyn Store>, key: Key<Option<T>>) -> Self {
        Self::new(store, key, None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use prefkit_store::{MemoryStore, NativeValue, StoreError};

    use super::*;
    use crate::settings_key;

    #[derive(Default)]
    struct CollectingSink(Mutex<Vec<String>>);

    impl CollectingSink {
        fn reports(&self) -> Vec<String> {
            self.0.lock().expect("lock").clone()
        }
    }

    impl DiagnosticsSink for CollectingSink {
        fn report(&self, error: &SettingsError) {
            self.0.lock().expect("lock").push(error.to_string());
        }
    }

    settings_key!(const COUNT: u32 = "count");
    settings_key!(const NAME: String = "name");
    settings_key!(const NICKNAME: Option<String> = "nickname");

    #[test]
    fn get_before_any_write_yields_default() {
        let store = Arc::new(MemoryStore::new());
        let count = Setting::new(store, COUNT, 5);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = Arc::new(MemoryStore::new());
        let name = Setting::new(store, NAME, String::new());
        name.set("felix".to_string());
        assert_eq!(name.get(), "felix");
    }

    #[test]
    fn remove_restores_default_and_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let count = Setting::new(store, COUNT, 5);

        count.set(99);
        assert_eq!(count.get(), 99);

        count.remove();
        assert_eq!(count.get(), 5);

        // Removing an absent slot is a no-op, not an error.
        count.remove();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn optional_setting_reads_absent_as_none() {
        let store = Arc::new(MemoryStore::new());
        let nickname = Setting::optional(store, NICKNAME);
        assert_eq!(nickname.get(), None);
    }

    #[test]
    fn setting_none_clears_the_slot() {
        let store = Arc::new(MemoryStore::new());
        let nickname = Setting::optional(store.clone(), NICKNAME);

        nickname.set(Some("fx".to_string()));
        assert_eq!(nickname.get(), Some("fx".to_string()));

        nickname.set(None);
        assert_eq!(nickname.get(), None);
        // No stored null marker: the slot itself is gone.
        assert_eq!(store.raw_get(NICKNAME.name()).expect("get"), None);
    }

    #[test]
    fn undecodable_value_yields_default_and_diagnostic() {
        let store = Arc::new(MemoryStore::new());
        store
            .raw_set(COUNT.name(), NativeValue::Text("corrupt".to_string()))
            .expect("set");

        let sink = Arc::new(CollectingSink::default());
        let count = Setting::new(store.clone(), COUNT, 5).with_diagnostics(sink.clone());

        assert_eq!(count.get(), 5);
        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("count"));

        // The corrupt value stays in place; get() does not repair the store.
        assert_eq!(
            store.raw_get(COUNT.name()).expect("get"),
            Some(NativeValue::Text("corrupt".to_string()))
        );
    }

    #[test]
    fn store_failure_on_get_yields_default_and_diagnostic() {
        struct FailingStore;

        impl Store for FailingStore {
            fn raw_get(&self, _key: &str) -> Result<Option<NativeValue>, StoreError> {
                Err(StoreError::Internal("backend offline".to_string()))
            }
            fn raw_set(&self, _key: &str, _value: NativeValue) -> Result<(), StoreError> {
                Err(StoreError::Internal("backend offline".to_string()))
            }
            fn raw_remove(&self, _key: &str) -> Result<(), StoreError> {
                Err(StoreError::Internal("backend offline".to_string()))
            }
        }

        let sink = Arc::new(CollectingSink::default());
        let count = Setting::new(Arc::new(FailingStore), COUNT, 5).with_diagnostics(sink.clone());

        assert_eq!(count.get(), 5);
        count.set(6);
        count.remove();
        assert_eq!(sink.reports().len(), 3);
    }

    #[test]
    fn round_trips_for_all_primitive_kinds() {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

        fn check<V: Storable + Clone + PartialEq + std::fmt::Debug>(
            store: Arc<dyn Store>,
            key: Key<V>,
            default: V,
            value: V,
        ) {
            let setting = Setting::new(store, key, default);
            setting.set(value.clone());
            assert_eq!(setting.get(), value);
        }

        check(store.clone(), Key::new("b"), false, true);
        check(store.clone(), Key::new("i8"), 0i8, -8);
        check(store.clone(), Key::new("i16"), 0i16, -16);
        check(store.clone(), Key::new("i32"), 0i32, -32);
        check(store.clone(), Key::new("i64"), 0i64, -64);
        check(store.clone(), Key::new("u8"), 0u8, 8);
        check(store.clone(), Key::new("u16"), 0u16, 16);
        check(store.clone(), Key::new("u32"), 0u32, 32);
        check(store.clone(), Key::new("u64"), 0u64, 64);
        check(store.clone(), Key::new("f32"), 0f32, 0.5);
        check(store.clone(), Key::new("f64"), 0f64, 2.75);
        check(
            store.clone(),
            Key::new("text"),
            String::new(),
            "value".to_string(),
        );
        check(
            store.clone(),
            Key::new("blob"),
            crate::Blob(vec![]),
            crate::Blob(vec![1, 2, 3]),
        );
        check(
            store.clone(),
            Key::new("seq"),
            Vec::new(),
            vec!["a".to_string(), "b".to_string()],
        );
    }
}
