//! Outstanding-request counter that emits active/idle notifications.

use crate::observer::{ActivitySource, RequestActivityObserver, SubscriptionId};
use crate::toggle::Notification;
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

#[derive(Default)]
struct TrackerInner {
    outstanding: Cell<usize>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(SubscriptionId, Rc<dyn RequestActivityObserver>)>>,
    /// Set while notifications are being delivered
    notifying: Cell<bool>,
    /// Notifications raised by handlers, delivered after the current one
    pending: RefCell<VecDeque<Notification>>,
}

/// Counts outstanding requests for one page or process.
///
/// This struct is cheaply cloneable (via `Rc`); every clone shares the same
/// counter and observer list. It is `!Send`: all requests and
/// handlers run on the single UI thread.
#[derive(Clone, Default)]
pub struct RequestTracker {
    inner: Rc<TrackerInner>,
}

impl RequestTracker {
    /// Create a tracker with no outstanding requests and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one request as started.
    ///
    /// Notifies observers `on_requests_active` if this is the first
    /// outstanding request. The request counts as finished when the returned
    /// guard is dropped, whatever the outcome.
    #[must_use = "the request is finished as soon as the guard is dropped"]
    pub fn begin(&self) -> RequestGuard {
        let previous = self.inner.outstanding.get();
        self.inner.outstanding.set(previous + 1);
        if previous == 0 {
            debug!("requests active");
            self.notify(Notification::Active);
        }
        RequestGuard {
            tracker: self.clone(),
        }
    }

    /// Track a future as one request.
    ///
    /// The request starts now, not on first poll, and finishes when the
    /// returned future completes or is dropped.
    pub fn track<F: Future>(&self, future: F) -> impl Future<Output = F::Output> {
        let guard = self.begin();
        async move {
            let output = future.await;
            drop(guard);
            output
        }
    }

    /// Number of requests currently outstanding.
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.get()
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn finish(&self) {
        let previous = self.inner.outstanding.get();
        // Guards are the only way to decrement, so this cannot underflow.
        debug_assert!(previous > 0, "request finished with no outstanding requests");
        let remaining = previous.saturating_sub(1);
        self.inner.outstanding.set(remaining);
        if previous == 1 {
            debug!("requests idle");
            self.notify(Notification::Idle);
        }
    }

    /// Queue a notification and, unless a delivery is already running
    /// further up the stack, deliver the queue in order.
    ///
    /// Handlers that start or finish requests only enqueue, so every observer
    /// sees every notification in the order the counter produced them.
    fn notify(&self, notification: Notification) {
        self.inner.pending.borrow_mut().push_back(notification);
        if self.inner.notifying.replace(true) {
            return;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(notification) = next else { break };

            // Snapshot so handlers can touch the observer list.
            let observers: Vec<(SubscriptionId, Rc<dyn RequestActivityObserver>)> =
                self.inner.observers.borrow().clone();
            for (id, observer) in &observers {
                if !self.is_subscribed(*id) {
                    continue;
                }
                match notification {
                    Notification::Active => observer.on_requests_active(),
                    Notification::Idle => observer.on_requests_idle(),
                }
            }
        }

        self.inner.notifying.set(false);
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .observers
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }
}

impl ActivitySource for RequestTracker {
    fn subscribe(&self, observer: Rc<dyn RequestActivityObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.observers.borrow_mut().push((id, observer));
        debug!("observer {} subscribed", id);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.inner.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        before != observers.len()
    }

    fn is_busy(&self) -> bool {
        self.outstanding() > 0
    }
}

/// One outstanding request. Dropping it finishes the request.
pub struct RequestGuard {
    tracker: RequestTracker,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.tracker.finish();
    }
}
