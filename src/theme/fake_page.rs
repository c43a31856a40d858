//! In-memory page used by the handler tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;
use crate::theme::target::{AttributeTarget, ClassTarget, ThemePage};

#[derive(Debug, Default)]
struct FakeNode {
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    reads: usize,
    writes: usize,
    frozen: bool,
}

/// Shared handle to a fake node; clones alias the same node.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn with_class(class: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().classes.push(class.to_owned());
        el
    }

    pub fn with_attrs(attrs: &[(&str, &str)]) -> Self {
        let el = Self::default();
        for (name, value) in attrs {
            el.0.borrow_mut()
                .attrs
                .insert((*name).to_owned(), (*value).to_owned());
        }
        el
    }

    /// Make every subsequent write fail, like a detached node would.
    pub fn freeze(&self) {
        self.0.borrow_mut().frozen = true;
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    pub fn attrs(&self) -> BTreeMap<String, String> {
        self.0.borrow().attrs.clone()
    }

    pub fn reads(&self) -> usize {
        self.0.borrow().reads
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }

    fn check_writable(&self, op: &'static str) -> Result<(), ThemeError> {
        if self.0.borrow().frozen {
            return Err(ThemeError::dom(op, "node is frozen"));
        }
        Ok(())
    }
}

impl ClassTarget for FakeElement {
    fn has_class(&self, class: &str) -> Result<bool, ThemeError> {
        let mut node = self.0.borrow_mut();
        node.reads += 1;
        Ok(node.classes.iter().any(|c| c == class))
    }

    fn toggle_class(&self, class: &str) -> Result<(), ThemeError> {
        self.check_writable("classList.toggle")?;
        let mut node = self.0.borrow_mut();
        node.writes += 1;
        if let Some(pos) = node.classes.iter().position(|c| c == class) {
            node.classes.remove(pos);
        } else {
            node.classes.push(class.to_owned());
        }
        Ok(())
    }
}

impl AttributeTarget for FakeElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.check_writable("setAttribute")?;
        let mut node = self.0.borrow_mut();
        node.writes += 1;
        node.attrs.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Page with a root element plus elements registered by selector and id.
#[derive(Debug, Default)]
pub struct FakePage {
    root: Option<FakeElement>,
    selectors: HashMap<String, FakeElement>,
    ids: HashMap<String, FakeElement>,
    id_lookups: Cell<usize>,
}

impl FakePage {
    pub fn new(root: FakeElement) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }

    pub fn with_selector(mut self, selector: &str, element: FakeElement) -> Self {
        self.selectors.insert(selector.to_owned(), element);
        self
    }

    pub fn with_id(mut self, id: &str, element: FakeElement) -> Self {
        self.ids.insert(id.to_owned(), element);
        self
    }

    pub fn id_lookups(&self) -> usize {
        self.id_lookups.get()
    }
}

impl ThemePage for FakePage {
    type Element = FakeElement;

    fn root(&self) -> Result<FakeElement, ThemeError> {
        self.root.clone().ok_or(ThemeError::NoRootElement)
    }

    fn query(&self, selector: &str) -> Result<Option<FakeElement>, ThemeError> {
        if selector.trim().is_empty() {
            return Err(ThemeError::dom("querySelector", "empty selector"));
        }
        Ok(self.selectors.get(selector).cloned())
    }

    fn by_id(&self, id: &str) -> Option<FakeElement> {
        self.id_lookups.set(self.id_lookups.get() + 1);
        self.ids.get(id).cloned()
    }
}
