//! # portfolio-theme
//!
//! WASM light/dark theme switch for the portfolio page.
//!
//! The `theme` modules hold the toggle logic against small element
//! capabilities so it runs and tests on the host; `startup` holds the
//! start-once and readiness decisions. The `dom` and `wiring`
//! modules bind those capabilities to `web_sys` and register the page
//! handlers; both only exist with the `hydrate` feature.

pub mod config;
pub mod error;
pub mod startup;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod wiring;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use theme::controller::ThemeController;
pub use theme::mode::ThemeMode;
