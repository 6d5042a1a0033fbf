//! Marker target backed by a DOM element's `classList`.

use crate::error::WebError;
use log::warn;
use sno_activity::{MarkerRoot, MarkerTarget};
use web_sys::Element;

/// Adds and removes the marker as a CSS class on one element.
#[derive(Clone)]
pub struct ElementClassTarget {
    element: Element,
}

impl ElementClassTarget {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Look up the configured root in the current document.
    pub fn resolve(root: &MarkerRoot) -> Result<Self, WebError> {
        let document = web_sys::window()
            .ok_or(WebError::NoWindow)?
            .document()
            .ok_or(WebError::NoDocument)?;

        let element: Element = match root {
            MarkerRoot::Body => document.body().ok_or(WebError::NoBody)?.into(),
            MarkerRoot::Element { id } => document
                .get_element_by_id(id)
                .ok_or_else(|| WebError::ElementNotFound(id.clone()))?,
        };

        Ok(Self::new(element))
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl MarkerTarget for ElementClassTarget {
    fn add_marker(&self, marker: &str) {
        if let Err(e) = self.element.class_list().add_1(marker) {
            warn!("could not add class {:?}: {}", marker, WebError::from_js(e));
        }
    }

    fn remove_marker(&self, marker: &str) {
        if let Err(e) = self.element.class_list().remove_1(marker) {
            warn!("could not remove class {:?}: {}", marker, WebError::from_js(e));
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.element.class_list().contains(marker)
    }
}
