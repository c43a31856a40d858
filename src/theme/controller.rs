//! Theme toggler and initial switch sync.
//!
//! DESIGN
//! ======
//! `toggle` is the only operation that changes the mode. It flips the marker,
//! reads the result back, then brings the avatar and (if present) the switch
//! in line with it. `sync_initial` runs once after the page is parsed and
//! only writes the switch's ARIA attributes.
//!
//! ERROR HANDLING
//! ==============
//! The avatar is looked up after the flip, so a page missing its avatar ends
//! up with the class flipped and an error returned. Nothing is rolled back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use log::debug;

use crate::config::{AvatarVariant, SwitchLabels, ThemeConfig};
use crate::error::ThemeError;
use crate::theme::mode::ThemeMode;
use crate::theme::store::{MarkerStore, ModeStore, toggle_and_read};
use crate::theme::target::{AttributeTarget, ThemePage};

/// Accessible switch control, present only when the page has one.
pub struct SwitchSink<'a, E> {
    element: E,
    labels: &'a SwitchLabels,
}

impl<'a, E: AttributeTarget> SwitchSink<'a, E> {
    pub fn new(element: E, labels: &'a SwitchLabels) -> Self {
        Self { element, labels }
    }

    /// Write `aria-checked` and `aria-label` for `mode`.
    ///
    /// # Errors
    ///
    /// Propagates attribute write failures.
    pub fn reflect(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.element.set_attribute("aria-checked", mode.aria_checked())?;
        self.element
            .set_attribute("aria-label", &self.labels.action_for(mode))
    }
}

fn show_avatar<E: AttributeTarget>(avatar: &E, variant: &AvatarVariant) -> Result<(), ThemeError> {
    avatar.set_attribute("src", &variant.src)?;
    avatar.set_attribute("alt", &variant.alt)
}

/// Runs the theme handlers against a [`ThemePage`].
#[derive(Clone, Debug, Default)]
pub struct ThemeController {
    config: ThemeConfig,
}

impl ThemeController {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    fn switch_sink<P: ThemePage>(&self, page: &P) -> Option<SwitchSink<'_, P::Element>> {
        page.switch(&self.config)
            .map(|element| SwitchSink::new(element, &self.config.labels))
    }

    /// Current mode, read from the page without changing it.
    ///
    /// # Errors
    ///
    /// Fails when the root element is unavailable.
    pub fn current_mode<P: ThemePage>(&self, page: &P) -> Result<ThemeMode, ThemeError> {
        MarkerStore::new(page.root()?, &self.config.marker_class).mode()
    }

    /// Toggle the theme and update the avatar and switch to match.
    ///
    /// Returns the mode the page is in afterwards.
    ///
    /// # Errors
    ///
    /// Fails when the root element or avatar image is missing, or when a
    /// DOM write is rejected.
    pub fn toggle<P: ThemePage>(&self, page: &P) -> Result<ThemeMode, ThemeError> {
        let mut store = MarkerStore::new(page.root()?, &self.config.marker_class);
        let mode = toggle_and_read(&mut store)?;

        let avatar = page.avatar(&self.config)?;
        show_avatar(&avatar, self.config.avatar_for(mode))?;

        if let Some(switch) = self.switch_sink(page) {
            switch.reflect(mode)?;
        }

        debug!("theme toggled to {mode}");
        Ok(mode)
    }

    /// Align the switch's ARIA attributes with the mode set by the markup.
    ///
    /// Never changes the mode or the avatar. Returns the mode it synced to,
    /// or `None` when the page has no switch and nothing was read.
    ///
    /// # Errors
    ///
    /// Fails when the root element is missing or a switch write is rejected.
    pub fn sync_initial<P: ThemePage>(&self, page: &P) -> Result<Option<ThemeMode>, ThemeError> {
        let Some(switch) = self.switch_sink(page) else {
            debug!("no switch control; initial sync skipped");
            return Ok(None);
        };
        let mode = self.current_mode(page)?;
        switch.reflect(mode)?;
        debug!("switch synced to {mode}");
        Ok(Some(mode))
    }
}
