//! Dark Mode Demo - a web application shell with a persisted theme toggle
//!
//! Core modules:
//! - `preference`: A single boolean persisted to a key-value store
//! - `toggle`: Light/Dark toggle control built on the preference
//! - `shell`: Application shell composing the toggle with static content
//! - `platform`: Browser/native abstraction for storage and the body marker
//! - `config`: Storage key, marker class and test id

pub mod config;
pub mod error;
pub mod platform;
pub mod preference;
pub mod shell;
pub mod toggle;

pub use config::ToggleConfig;
pub use error::{ConfigError, PreferenceError, StoreError};
pub use preference::{MarkerEffect, PersistedPreference};
pub use shell::{AppShell, HeaderContent};
pub use toggle::{ThemeMode, ToggleControl, ToggleView};

/// Application constants
pub mod consts {
    /// LocalStorage key holding the JSON-encoded preference
    pub const STORAGE_KEY: &str = "darkMode";
    /// Class applied to the document body while dark mode is on
    pub const DARK_MODE_CLASS: &str = "dark-mode";
    /// Stable identifier used by tests to find the toggle
    pub const TOGGLE_TEST_ID: &str = "dark-mode-toggle";
    /// CSS class of the toggle button
    pub const TOGGLE_CLASS: &str = "dark-mode-toggle";
    /// Id of the element the browser build mounts into
    pub const MOUNT_ELEMENT_ID: &str = "app";
}
