use super::*;
use crate::theme::fake_page::FakeElement;

/// Store whose flips are swallowed by some other writer.
struct PinnedStore(ThemeMode);

impl ModeStore for PinnedStore {
    fn mode(&self) -> Result<ThemeMode, ThemeError> {
        Ok(self.0)
    }

    fn flip(&mut self) -> Result<(), ThemeError> {
        Ok(())
    }
}

#[test]
fn marker_store_reads_class_presence() {
    let dark = MarkerStore::new(FakeElement::default(), "light");
    assert_eq!(dark.mode().unwrap(), ThemeMode::Dark);

    let light = MarkerStore::new(FakeElement::with_class("light"), "light");
    assert_eq!(light.mode().unwrap(), ThemeMode::Light);
}

#[test]
fn marker_store_ignores_other_classes() {
    let root = FakeElement::with_class("lighter");
    let store = MarkerStore::new(root, "light");
    assert_eq!(store.mode().unwrap(), ThemeMode::Dark);
}

#[test]
fn flip_toggles_only_the_marker() {
    let root = FakeElement::with_class("no-js");
    let mut store = MarkerStore::new(root.clone(), "light");

    store.flip().unwrap();
    assert_eq!(root.classes(), vec!["no-js".to_owned(), "light".to_owned()]);

    store.flip().unwrap();
    assert_eq!(root.classes(), vec!["no-js".to_owned()]);
}

#[test]
fn toggle_and_read_reports_state_after_flip() {
    let mut store = MarkerStore::new(FakeElement::default(), "light");
    assert_eq!(toggle_and_read(&mut store).unwrap(), ThemeMode::Light);
    assert_eq!(toggle_and_read(&mut store).unwrap(), ThemeMode::Dark);
}

#[test]
fn toggle_and_read_trusts_the_store_over_arithmetic() {
    let mut store = PinnedStore(ThemeMode::Dark);
    assert_eq!(toggle_and_read(&mut store).unwrap(), ThemeMode::Dark);
}

#[test]
fn flip_propagates_write_failure() {
    let root = FakeElement::default();
    root.freeze();
    let mut store = MarkerStore::new(root, "light");
    assert!(matches!(store.flip(), Err(ThemeError::Dom { .. })));
}
