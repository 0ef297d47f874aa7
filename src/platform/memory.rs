//! In-memory platform backends
//!
//! Clones share state, so a test can keep one handle while the shell owns
//! another.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{KeyValueStore, PresentationRoot};
use crate::error::StoreError;

/// Key-value store held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every operation fails, like LocalStorage disabled by policy
    pub fn unavailable() -> Self {
        Self {
            items: Rc::default(),
            unavailable: true,
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Presentation root held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    markers: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers currently present, sorted
    pub fn markers(&self) -> Vec<String> {
        self.markers.borrow().iter().cloned().collect()
    }
}

impl PresentationRoot for MemoryRoot {
    fn set_marker(&self, name: &str, present: bool) -> Result<(), StoreError> {
        let mut markers = self.markers.borrow_mut();
        if present {
            markers.insert(name.to_string());
        } else {
            markers.remove(name);
        }
        Ok(())
    }

    fn has_marker(&self, name: &str) -> bool {
        self.markers.borrow().contains(name)
    }
}
