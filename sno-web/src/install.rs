//! One-call setup of the body-class toggle.

use crate::class_target::ElementClassTarget;
use crate::error::WebError;
use log::info;
use sno_activity::{LoadingToggle, RequestTracker, SubscriptionId, ToggleConfig};
use std::rc::Rc;

/// A toggle attached to a tracker.
pub struct InstalledToggle {
    pub subscription: SubscriptionId,
    pub toggle: Rc<LoadingToggle<ElementClassTarget>>,
}

impl InstalledToggle {
    /// Detach from the tracker and clear the marker.
    pub fn detach(&self, tracker: &RequestTracker) {
        self.toggle.detach(tracker, self.subscription);
        info!("loading toggle detached ({})", self.subscription);
    }
}

/// Attach a toggle that mirrors `tracker` onto the configured root element.
///
/// Call once at startup, after the body exists. If requests are already in
/// flight the marker is applied immediately.
pub fn install_loading_toggle(
    tracker: &RequestTracker,
    config: &ToggleConfig,
) -> Result<InstalledToggle, WebError> {
    config.validate()?;
    let target = ElementClassTarget::resolve(&config.root)?;
    let (toggle, subscription) = LoadingToggle::from_config(target, config).attach(tracker);
    info!(
        "loading toggle installed ({}, class {:?})",
        subscription, config.marker_class
    );

    Ok(InstalledToggle {
        subscription,
        toggle,
    })
}
