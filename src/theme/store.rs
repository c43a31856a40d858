//! Shared theme state holder.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::ThemeError;
use crate::theme::mode::ThemeMode;
use crate::theme::target::ClassTarget;

/// Readable/flippable theme state shared by both handlers.
pub trait ModeStore {
    /// # Errors
    ///
    /// Returns an error if the backing state cannot be read.
    fn mode(&self) -> Result<ThemeMode, ThemeError>;

    /// Switch to the other mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing state cannot be written.
    fn flip(&mut self) -> Result<(), ThemeError>;
}

/// Store backed by the marker class on the root element.
#[derive(Clone, Debug)]
pub struct MarkerStore<'a, E> {
    root: E,
    marker: &'a str,
}

impl<'a, E: ClassTarget> MarkerStore<'a, E> {
    pub fn new(root: E, marker: &'a str) -> Self {
        Self { root, marker }
    }
}

impl<E: ClassTarget> ModeStore for MarkerStore<'_, E> {
    fn mode(&self) -> Result<ThemeMode, ThemeError> {
        Ok(ThemeMode::from_marker(self.root.has_class(self.marker)?))
    }

    fn flip(&mut self) -> Result<(), ThemeError> {
        self.root.toggle_class(self.marker)
    }
}

/// Flip the store, then read back the mode it actually holds.
///
/// The result is never derived from the pre-flip value, so other writers
/// of the same state are respected.
///
/// # Errors
///
/// Propagates read/write failures from the store.
pub fn toggle_and_read<S: ModeStore + ?Sized>(store: &mut S) -> Result<ThemeMode, ThemeError> {
    store.flip()?;
    store.mode()
}
