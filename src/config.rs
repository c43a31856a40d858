//! Page selectors and literal theme data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults describe the portfolio page markup. A host may pass a partial
//! JSON document to override any field; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::mode::ThemeMode;

/// Image source and alternative text shown for one theme.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AvatarVariant {
    pub src: String,
    pub alt: String,
}

impl AvatarVariant {
    fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_owned(),
            alt: alt.to_owned(),
        }
    }
}

/// Words used to build the switch's `aria-label`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SwitchLabels {
    pub prefix: String,
    pub light: String,
    pub dark: String,
}

impl Default for SwitchLabels {
    fn default() -> Self {
        Self {
            prefix: "Ativar modo".to_owned(),
            light: "claro".to_owned(),
            dark: "escuro".to_owned(),
        }
    }
}

impl SwitchLabels {
    /// Label naming the action the switch performs while `current` is active.
    ///
    /// The action is always "activate the other mode".
    pub fn action_for(&self, current: ThemeMode) -> String {
        let target = match current.opposite() {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        };
        format!("{} {target}", self.prefix)
    }
}

/// Everything the handlers need to know about the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Class on `<html>` whose presence means light mode.
    pub marker_class: String,
    pub avatar_selector: String,
    pub switch_id: String,
    pub light_avatar: AvatarVariant,
    pub dark_avatar: AvatarVariant,
    pub labels: SwitchLabels,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            marker_class: "light".to_owned(),
            avatar_selector: "#profile img".to_owned(),
            switch_id: "switch".to_owned(),
            light_avatar: AvatarVariant::new(
                "./assets/eu-avatar2.png",
                "Foto de Mayk Brito sorrindo, usando óculos e camisa preta, com barba e fundo azul.",
            ),
            dark_avatar: AvatarVariant::new(
                "./assets/eu-avatar.jpeg",
                "Foto de Mayk Brito sorrindo, usando óculos e camisa preta, com barba e fundo colorido.",
            ),
            labels: SwitchLabels::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ConfigParse`] for malformed JSON and
    /// [`ThemeError::InvalidConfig`] when a lookup key is empty.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs whose lookups could never match anything.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let keys = [
            ("marker_class", &self.marker_class),
            ("avatar_selector", &self.avatar_selector),
            ("switch_id", &self.switch_id),
        ];
        for (name, value) in keys {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{name} is empty")));
            }
        }
        if self.marker_class.contains(char::is_whitespace) {
            return Err(ThemeError::InvalidConfig(
                "marker_class must be a single class name".to_owned(),
            ));
        }
        Ok(())
    }

    /// Avatar pair matching `mode`.
    pub fn avatar_for(&self, mode: ThemeMode) -> &AvatarVariant {
        match mode {
            ThemeMode::Light => &self.light_avatar,
            ThemeMode::Dark => &self.dark_avatar,
        }
    }
}
