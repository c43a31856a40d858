//! `web_sys` binding for the theme capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements are looked up on every handler call rather than cached, so the
//! handlers always see the live document.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::error::ThemeError;
use crate::theme::target::{AttributeTarget, ClassTarget, ThemePage};

/// Map a rejected JS call to [`ThemeError::Dom`].
pub(crate) fn dom_error(op: &'static str) -> impl FnOnce(JsValue) -> ThemeError {
    move |err| ThemeError::dom(op, err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ClassTarget for Element {
    fn has_class(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.class_list().contains(class))
    }

    fn toggle_class(&self, class: &str) -> Result<(), ThemeError> {
        self.class_list()
            .toggle(class)
            .map(|_| ())
            .map_err(dom_error("classList.toggle"))
    }
}

impl AttributeTarget for Element {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        Element::set_attribute(self, name, value).map_err(dom_error("setAttribute"))
    }
}

/// The current browser document.
#[derive(Clone, Debug)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page for the global `window.document`.
    ///
    /// # Errors
    ///
    /// Fails outside a browser window context.
    pub fn current() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ThemePage for DomPage {
    type Element = Element;

    fn root(&self) -> Result<Element, ThemeError> {
        self.document
            .document_element()
            .ok_or(ThemeError::NoRootElement)
    }

    fn query(&self, selector: &str) -> Result<Option<Element>, ThemeError> {
        self.document
            .query_selector(selector)
            .map_err(dom_error("querySelector"))
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}
