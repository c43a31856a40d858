//! Error type shared by the theme handlers and the DOM binding.
//!
//! ERROR HANDLING
//! ==============
//! The page is assumed to carry its required markup. A missing root element
//! or avatar image surfaces as an error to the caller and is not recovered.
//! A missing switch control is not an error at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("avatar image not found: {selector}")]
    MissingAvatar { selector: String },
    #[error("dom {op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
    #[error("theme config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ThemeError {
    /// A rejected DOM call, named by the JS API that failed.
    pub fn dom(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Dom {
            op,
            detail: detail.into(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}
