//! Application shell
//!
//! Composes the toggle with static header content. The shell is the only
//! place presentation effects are applied to the root.

use crate::config::ToggleConfig;
use crate::platform::{KeyValueStore, PresentationRoot};
use crate::preference::MarkerEffect;
use crate::toggle::{ToggleControl, ToggleView};

/// Static header text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContent {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Rendered after a bold "New Feature:" prefix
    pub feature_note: &'static str,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            title: "Enhanced Web Application",
            tagline: "Automated enhancement pipeline demo",
            feature_note: "Dark Mode Toggle (top-right corner)",
        }
    }
}

/// Mounted application: toggle, header and the presentation root
pub struct AppShell<S, R> {
    toggle: ToggleControl<S>,
    root: R,
    marker: String,
    header: HeaderContent,
}

impl<S: KeyValueStore, R: PresentationRoot> AppShell<S, R> {
    /// Build the shell and reconcile the root marker with the stored value
    pub fn mount(config: &ToggleConfig, store: S, root: R) -> Self {
        let mut shell = Self {
            toggle: ToggleControl::new(config, store),
            root,
            marker: config.marker_class.clone(),
            header: HeaderContent::default(),
        };
        if let Some(effect) = shell.toggle.mount() {
            shell.apply(effect);
        }
        shell
    }

    /// Forward a click to the toggle; returns the view to redraw
    pub fn click_toggle(&mut self) -> ToggleView {
        let effect = self.toggle.activate();
        self.apply(effect);
        self.toggle.view()
    }

    pub fn toggle_view(&self) -> ToggleView {
        self.toggle.view()
    }

    pub fn toggle(&self) -> &ToggleControl<S> {
        &self.toggle
    }

    pub fn header(&self) -> &HeaderContent {
        &self.header
    }

    pub fn is_dark(&self) -> bool {
        self.toggle.mode().is_dark()
    }

    fn apply(&self, effect: MarkerEffect) {
        if let Err(e) = self.root.set_marker(&self.marker, effect.present) {
            log::warn!("Could not update `{}` marker: {}", self.marker, e);
        }
    }
}
