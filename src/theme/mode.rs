#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;

/// The two presentation states of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// No marker class on the root element.
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Mode encoded by the presence of the marker class.
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Light } else { Self::Dark }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// The mode a toggle leads to.
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value for the switch's `aria-checked` attribute.
    pub fn aria_checked(self) -> &'static str {
        if self.is_light() { "true" } else { "false" }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
