//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively and in tests)
//! - The presentation root (document body class list on web)

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryRoot, MemoryStore};

use crate::error::StoreError;

/// Synchronous string key-value store scoped to one origin
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Root node carrying named presentation markers (CSS classes)
pub trait PresentationRoot {
    /// Add (`present == true`) or remove the marker
    fn set_marker(&self, name: &str, present: bool) -> Result<(), StoreError>;
    fn has_marker(&self, name: &str) -> bool;
}
