//! The capability connecting a request counter to the things that watch it.

use std::fmt;
use std::rc::Rc;

/// Receives the two lifecycle notifications of a request tracker.
///
/// `on_requests_active` is delivered when the outstanding count goes from
/// zero to one, `on_requests_idle` when it returns to zero. Handlers run
/// synchronously inside the call that changed the count and must not block.
pub trait RequestActivityObserver {
    fn on_requests_active(&self);
    fn on_requests_idle(&self);
}

impl<T: RequestActivityObserver + ?Sized> RequestActivityObserver for Rc<T> {
    fn on_requests_active(&self) {
        (**self).on_requests_active()
    }

    fn on_requests_idle(&self) {
        (**self).on_requests_idle()
    }
}

/// Anything that counts requests and emits active/idle notifications.
///
/// An HTTP client used with the loading toggle must implement this
/// faithfully: "active" on the first outstanding request, "idle" only once
/// the count has drained back to zero.
pub trait ActivitySource {
    /// Attach an observer for the lifetime of the source (or until unsubscribed).
    fn subscribe(&self, observer: Rc<dyn RequestActivityObserver>) -> SubscriptionId;

    /// Detach an observer. Returns false if the id was not subscribed.
    ///
    /// Takes effect immediately, including for a notification that is being
    /// delivered when this is called.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Whether at least one tracked request is outstanding.
    fn is_busy(&self) -> bool;
}

/// Handle returned by [`ActivitySource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Observer built from two closures.
pub struct FnObserver {
    on_active: Box<dyn Fn()>,
    on_idle: Box<dyn Fn()>,
}

impl RequestActivityObserver for FnObserver {
    fn on_requests_active(&self) {
        (self.on_active)()
    }

    fn on_requests_idle(&self) {
        (self.on_idle)()
    }
}

/// Build an observer from an "active" callback and an "idle" callback.
pub fn observer_fn(
    on_active: impl Fn() + 'static,
    on_idle: impl Fn() + 'static,
) -> Rc<FnObserver> {
    Rc::new(FnObserver {
        on_active: Box::new(on_active),
        on_idle: Box::new(on_idle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_fn_observer_dispatches_to_matching_closure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let observer = observer_fn(
            move || a.borrow_mut().push("active"),
            move || b.borrow_mut().push("idle"),
        );

        observer.on_requests_active();
        observer.on_requests_idle();
        observer.on_requests_idle();

        assert_eq!(*log.borrow(), vec!["active", "idle", "idle"]);
    }

    #[test]
    fn test_subscription_id_display() {
        assert_eq!(SubscriptionId(7).to_string(), "sub#7");
    }
}
