//! Browser backends (WASM only)

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Storage};

use super::{KeyValueStore, PresentationRoot};
use crate::error::StoreError;

fn rejected(err: JsValue) -> StoreError {
    StoreError::Rejected(format!("{:?}", err))
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open LocalStorage, `None` when the browser denies access
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(rejected)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(rejected)
    }
}

/// Class list of `document.body`
pub struct BodyClassList {
    body: HtmlElement,
}

impl BodyClassList {
    pub fn new(body: HtmlElement) -> Self {
        Self { body }
    }

    /// Body of the current document, if there is one
    pub fn from_document() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self::new(body))
    }
}

impl PresentationRoot for BodyClassList {
    fn set_marker(&self, name: &str, present: bool) -> Result<(), StoreError> {
        let class_list = self.body.class_list();
        if present {
            class_list.add_1(name).map_err(rejected)
        } else {
            class_list.remove_1(name).map_err(rejected)
        }
    }

    fn has_marker(&self, name: &str) -> bool {
        self.body.class_list().contains(name)
    }
}
