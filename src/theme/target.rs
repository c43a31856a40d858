//! Element capabilities the handlers depend on.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` implements these for `web_sys::Element`. Elements are handles:
//! cloning one refers to the same node, as with the DOM.

use crate::config::ThemeConfig;
use crate::error::ThemeError;

/// Class list access on the root element.
pub trait ClassTarget {
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the class list cannot be read.
    fn has_class(&self, class: &str) -> Result<bool, ThemeError>;

    /// Add `class` if absent, remove it if present.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the class list rejects the change.
    fn toggle_class(&self, class: &str) -> Result<(), ThemeError>;
}

/// Attribute writes on the avatar and switch elements.
pub trait AttributeTarget {
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// The page the handlers run against.
pub trait ThemePage {
    type Element: ClassTarget + AttributeTarget;

    /// The root structural element (`<html>`).
    ///
    /// # Errors
    ///
    /// Returns an error when the page has no root element.
    fn root(&self) -> Result<Self::Element, ThemeError>;

    /// First element matching a CSS selector, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] for an unparsable selector.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, ThemeError>;

    /// Element with the given id, if any.
    fn by_id(&self, id: &str) -> Option<Self::Element>;

    /// The avatar image. Required markup.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingAvatar`] when nothing matches.
    fn avatar(&self, config: &ThemeConfig) -> Result<Self::Element, ThemeError> {
        self.query(&config.avatar_selector)?
            .ok_or_else(|| ThemeError::MissingAvatar {
                selector: config.avatar_selector.clone(),
            })
    }

    /// The switch control. Optional markup.
    fn switch(&self, config: &ThemeConfig) -> Option<Self::Element> {
        self.by_id(&config.switch_id)
    }
}
