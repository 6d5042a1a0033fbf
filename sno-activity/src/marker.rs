//! Places a loading marker can live.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// A container that can carry named markers (CSS classes in the browser).
///
/// Adding a present marker and removing an absent one are no-ops. The
/// methods are infallible; implementations that talk to a fallible backend
/// log and carry on.
pub trait MarkerTarget {
    fn add_marker(&self, marker: &str);
    fn remove_marker(&self, marker: &str);
    fn has_marker(&self, marker: &str) -> bool;
}

impl<T: MarkerTarget + ?Sized> MarkerTarget for Rc<T> {
    fn add_marker(&self, marker: &str) {
        (**self).add_marker(marker)
    }

    fn remove_marker(&self, marker: &str) {
        (**self).remove_marker(marker)
    }

    fn has_marker(&self, marker: &str) -> bool {
        (**self).has_marker(marker)
    }
}

/// In-memory class list, shared between clones.
///
/// Stands in for a DOM element's `classList` on native targets and in tests.
#[derive(Clone, Default, Debug)]
pub struct ClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing `className` string, e.g. `"page dark"`.
    pub fn from_class_name(class_name: &str) -> Self {
        let list = Self::new();
        list.classes
            .borrow_mut()
            .extend(class_name.split_ascii_whitespace().map(str::to_string));
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn len(&self) -> usize {
        self.classes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }
}

impl MarkerTarget for ClassList {
    fn add_marker(&self, marker: &str) {
        self.classes.borrow_mut().insert(marker.to_string());
    }

    fn remove_marker(&self, marker: &str) {
        self.classes.borrow_mut().remove(marker);
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.contains(marker)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self.classes.borrow();
        let joined: Vec<&str> = classes.iter().map(String::as_str).collect();
        write!(f, "{}", joined.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let list = ClassList::new();
        list.add_marker("loading");
        list.add_marker("loading");
        assert_eq!(list.len(), 1);

        list.remove_marker("loading");
        list.remove_marker("loading");
        assert!(list.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let list = ClassList::new();
        let view = list.clone();
        list.add_marker("loading");
        assert!(view.has_marker("loading"));
    }

    #[test]
    fn test_from_class_name_keeps_other_classes() {
        let list = ClassList::from_class_name("  page   dark ");
        list.add_marker("loading");
        assert_eq!(list.to_string(), "dark loading page");

        list.remove_marker("loading");
        assert_eq!(list.to_string(), "dark page");
    }
}
