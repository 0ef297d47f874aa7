//! Light/Dark toggle control
//!
//! Two states, no terminal state. The control owns its persisted preference
//! and hands back [`MarkerEffect`]s; it never touches the presentation root.

use crate::config::ToggleConfig;
use crate::consts::TOGGLE_CLASS;
use crate::platform::KeyValueStore;
use crate::preference::{MarkerEffect, PersistedPreference};

/// Current color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_enabled(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }

    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Icon shown while in this mode
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }

    /// Accessible label: the action a click performs, not the current mode
    pub fn action_label(&self) -> String {
        format!("Switch to {} mode", self.flipped().as_str())
    }
}

/// Everything needed to draw the toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub test_id: String,
    pub class_name: &'static str,
    pub aria_label: String,
    pub icon: &'static str,
    /// `aria-pressed`
    pub pressed: bool,
}

/// Toggle button state machine backed by a persisted preference
#[derive(Debug)]
pub struct ToggleControl<S> {
    preference: PersistedPreference<S>,
    mode: ThemeMode,
    mounted: bool,
    test_id: String,
}

impl<S: KeyValueStore> ToggleControl<S> {
    /// Create the control, reading the initial mode from `store`
    pub fn new(config: &ToggleConfig, store: S) -> Self {
        let preference = PersistedPreference::new(store, config.storage_key.clone());
        let enabled = preference.load();
        log::debug!("Initial load - saved value: {}", enabled);
        Self {
            preference,
            mode: ThemeMode::from_enabled(enabled),
            mounted: false,
            test_id: config.test_id.clone(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn preference(&self) -> &PersistedPreference<S> {
        &self.preference
    }

    /// Reconcile the marker with the loaded mode
    ///
    /// Yields an effect the first time only. The loaded value is written back
    /// so a fresh store holds an explicit `false` after the first mount.
    pub fn mount(&mut self) -> Option<MarkerEffect> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        log::info!("Toggle mounted in {} mode", self.mode.as_str());
        Some(self.preference.save(self.mode.is_dark()))
    }

    /// Handle a click: flip the mode and write it through
    ///
    /// A click counts as mounting: the returned effect supersedes the
    /// reconcile step, so a later `mount` yields nothing.
    pub fn activate(&mut self) -> MarkerEffect {
        self.mounted = true;
        log::debug!("Toggle clicked, current mode: {}", self.mode.as_str());
        self.mode = self.mode.flipped();
        log::info!("Mode changed to: {}", self.mode.as_str());
        self.preference.save(self.mode.is_dark())
    }

    pub fn view(&self) -> ToggleView {
        ToggleView {
            test_id: self.test_id.clone(),
            class_name: TOGGLE_CLASS,
            aria_label: self.mode.action_label(),
            icon: self.mode.icon(),
            pressed: self.mode.is_dark(),
        }
    }
}
