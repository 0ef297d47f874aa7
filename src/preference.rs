//! Persisted boolean preference
//!
//! One boolean stored as JSON (`"true"` / `"false"`) under a fixed key.
//! Writes are whole-value overwrites. The store is never allowed to break the
//! caller: read failures and malformed data load as `false`, write failures
//! are logged and the in-memory value stays authoritative.

use crate::error::PreferenceError;
use crate::platform::KeyValueStore;

/// Presentation change implied by a preference value
///
/// Returned instead of mutating the presentation root directly, so the
/// application shell applies every marker change at one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerEffect {
    /// Whether the marker must be present on the root
    pub present: bool,
}

impl MarkerEffect {
    pub fn for_value(enabled: bool) -> Self {
        Self { present: enabled }
    }
}

/// A boolean bound to one key of a [`KeyValueStore`]
#[derive(Debug)]
pub struct PersistedPreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistedPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the stored value; `Ok(false)` when nothing is stored
    pub fn try_load(&self) -> Result<bool, PreferenceError> {
        match self.store.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str::<bool>(&raw)?),
            None => Ok(false),
        }
    }

    /// Read the stored value, falling back to `false` on any failure
    pub fn load(&self) -> bool {
        match self.try_load() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not load `{}`, using false: {}", self.key, e);
                false
            }
        }
    }

    /// Overwrite the stored value
    pub fn try_save(&self, value: bool) -> Result<(), PreferenceError> {
        let json = serde_json::to_string(&value)?;
        self.store.set_item(&self.key, &json)?;
        Ok(())
    }

    /// Write `value` through and return the marker change it implies
    pub fn save(&self, value: bool) -> MarkerEffect {
        if let Err(e) = self.try_save(value) {
            log::warn!("Could not persist `{}` = {}: {}", self.key, value, e);
        }
        MarkerEffect::for_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::platform::MemoryStore;
    use proptest::prelude::*;

    fn preference(store: &MemoryStore) -> PersistedPreference<MemoryStore> {
        PersistedPreference::new(store.clone(), "darkMode")
    }

    #[test]
    fn test_absent_value_loads_false() {
        let store = MemoryStore::new();
        let pref = preference(&store);
        assert!(!pref.load());
        assert!(!pref.try_load().unwrap());
        // Loading alone never writes
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_writes_json_boolean() {
        let store = MemoryStore::new();
        let pref = preference(&store);

        let effect = pref.save(true);
        assert_eq!(effect, MarkerEffect { present: true });
        assert_eq!(store.get_item("darkMode").unwrap().as_deref(), Some("true"));

        let effect = pref.save(false);
        assert_eq!(effect, MarkerEffect { present: false });
        assert_eq!(store.get_item("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_value_loads_false() {
        let store = MemoryStore::new();
        let pref = preference(&store);
        for raw in ["", "yes", "1", "\"true\"", "{"] {
            store.set_item("darkMode", raw).unwrap();
            assert!(!pref.load(), "raw value {:?} should load as false", raw);
            assert!(matches!(pref.try_load(), Err(PreferenceError::Decode(_))));
        }
    }

    #[test]
    fn test_json_whitespace_is_accepted() {
        let store = MemoryStore::new();
        store.set_item("darkMode", " true ").unwrap();
        assert!(preference(&store).load());
    }

    #[test]
    fn test_unavailable_store_fails_soft() {
        let pref = PersistedPreference::new(MemoryStore::unavailable(), "darkMode");
        assert!(!pref.load());
        assert!(matches!(
            pref.try_load(),
            Err(PreferenceError::Store(StoreError::Unavailable))
        ));
        assert!(pref.try_save(true).is_err());
        assert_eq!(pref.save(true), MarkerEffect { present: true });
    }

    proptest! {
        #[test]
        fn prop_save_then_load_round_trips(values in proptest::collection::vec(any::<bool>(), 1..16)) {
            let store = MemoryStore::new();
            let pref = preference(&store);
            for value in values {
                let effect = pref.save(value);
                prop_assert_eq!(effect.present, value);
                prop_assert_eq!(pref.load(), value);
            }
        }
    }
}
