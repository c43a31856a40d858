//! Theme state and the two page handlers.
//!
//! DESIGN
//! ======
//! Light mode is the presence of a marker class on the root element. The
//! handlers reach it through [`store::ModeStore`] and write the avatar and
//! switch through [`target`] capabilities, so the same logic drives the
//! live DOM and in-memory test pages.

pub mod controller;
pub mod mode;
pub mod store;
pub mod target;

#[cfg(test)]
pub(crate) mod fake_page;
