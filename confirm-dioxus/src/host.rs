//! The document that dialog instances are mounted into.
//!
//! `DialogHost` owns every live [`DialogController`] in mount order and is
//! shared between the confirmation strategy and the Dioxus components. It is
//! `Clone + Send + Sync`, following the same `Arc<Mutex<_>>` sharing as the
//! application state.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::builder::DialogId;
use crate::controller::{DialogCommand, DialogController, DialogSnapshot};

/// Callback invoked after the set of mounted dialogs or their state changes.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`DialogHost::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct HostInner {
    dialogs: Vec<DialogController>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Shared container of mounted dialogs.
#[derive(Clone, Default)]
pub struct DialogHost {
    inner: Arc<Mutex<HostInner>>,
}

impl fmt::Debug for DialogHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("DialogHost")
            .field("dialogs", &inner.dialogs.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl DialogHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `controller` after every mounted dialog and show it.
    pub fn open(&self, mut controller: DialogController) -> DialogId {
        let id = controller.id().clone();
        controller.mount();
        {
            let mut inner = self.inner.lock();
            inner.dialogs.push(controller);
            if let Some(mounted) = inner.find_mut(&id) {
                mounted.show();
            }
            tracing::info!(%id, open = inner.dialogs.len(), "confirmation dialog opened");
        }
        self.notify();
        id
    }

    /// Route a user interaction to the dialog `id`.
    ///
    /// When the interaction hides the dialog, the instance is removed from the
    /// host before its decision is settled. Returns `false` for unknown ids.
    pub fn dispatch(&self, id: &DialogId, command: DialogCommand) -> bool {
        let teardown = {
            let mut inner = self.inner.lock();
            let Some(index) = inner.position(id) else {
                tracing::debug!(%id, ?command, "dispatch to unmounted dialog ignored");
                return false;
            };
            let teardown = inner
                .dialogs
                .get_mut(index)
                .and_then(|controller| controller.apply(command));
            if teardown.is_some() {
                // Destroy the instance together with its mounted markup.
                inner.dialogs.remove(index);
            }
            teardown
        };

        if let Some(teardown) = teardown {
            tracing::info!(
                %id,
                reason = ?teardown.reason,
                confirmed = teardown.confirmed,
                "confirmation dialog closed"
            );
            teardown.settle();
        }
        self.notify();
        true
    }

    /// Render state of every mounted dialog, in mount order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<DialogSnapshot> {
        self.inner
            .lock()
            .dialogs
            .iter()
            .map(DialogController::snapshot)
            .collect()
    }

    /// Ids of the mounted dialogs, in mount order.
    #[must_use]
    pub fn ids(&self) -> Vec<DialogId> {
        self.inner
            .lock()
            .dialogs
            .iter()
            .map(|controller| controller.id().clone())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: &DialogId) -> bool {
        self.inner.lock().position(id).is_some()
    }

    #[must_use]
    pub fn snapshot(&self, id: &DialogId) -> Option<DialogSnapshot> {
        let inner = self.inner.lock();
        inner
            .position(id)
            .and_then(|index| inner.dialogs.get(index))
            .map(DialogController::snapshot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().dialogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a change listener.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .lock()
            .listeners
            .retain(|(subscription, _)| *subscription != id);
    }

    /// Call listeners outside the lock so they may read the host.
    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl HostInner {
    fn position(&self, id: &DialogId) -> Option<usize> {
        self.dialogs
            .iter()
            .position(|controller| controller.id() == id)
    }

    fn find_mut(&mut self, id: &DialogId) -> Option<&mut DialogController> {
        self.dialogs
            .iter_mut()
            .find(|controller| controller.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::builder::{build_dialog, DialogRole};
    use crate::controller::{DismissReason, ModalOptions};
    use crate::decision::{decision_channel, PendingDecision};
    use crate::options::{ConfirmOptions, ElementAttributes, OptionDefaults, ATTR_TEXT};

    fn open(host: &DialogHost, element: &ElementAttributes) -> (DialogId, PendingDecision) {
        let options = ConfirmOptions::resolve("Are you sure?", element, None, &OptionDefaults::default());
        let (resolver, pending) = decision_channel();
        let view = build_dialog(DialogId::generate(), &options);
        let controller = DialogController::new(view, ModalOptions::default(), resolver);
        (host.open(controller), pending)
    }

    #[test]
    fn open_mounts_and_shows_at_the_end() {
        let host = DialogHost::new();
        let (first, _a) = open(&host, &ElementAttributes::new());
        let (second, _b) = open(&host, &ElementAttributes::new());

        assert_eq!(host.ids(), vec![first.clone(), second.clone()]);
        let snapshot = host.snapshot(&second).expect("second dialog should be mounted");
        assert_eq!(snapshot.focused, Some(DialogRole::Cancel));
        assert!(snapshot.accept_enabled);
    }

    #[test]
    fn accept_removes_dialog_before_caller_resumes() {
        let host = DialogHost::new();
        let (id, pending) = open(&host, &ElementAttributes::new());

        let observer = host.clone();
        let observed_id = id.clone();
        let resumed = async move {
            let confirmed = pending.await;
            (confirmed, observer.contains(&observed_id))
        };

        assert!(host.dispatch(&id, DialogCommand::Accept));
        assert_eq!(block_on(resumed), (true, false));
        assert!(host.is_empty());
    }

    #[test]
    fn second_dismissal_has_no_effect() {
        let host = DialogHost::new();
        let (id, mut pending) = open(&host, &ElementAttributes::new());

        assert!(host.dispatch(&id, DialogCommand::Reject));
        assert_eq!((&mut pending).now_or_never(), Some(false));

        assert!(!host.dispatch(&id, DialogCommand::Accept));
        assert!(!host.dispatch(&id, DialogCommand::Dismiss(DismissReason::Backdrop)));
        assert!(host.is_empty());
    }

    #[test]
    fn input_updates_mounted_snapshot() {
        let host = DialogHost::new();
        let element = ElementAttributes::new().with(ATTR_TEXT, "my-project");
        let (id, mut pending) = open(&host, &element);

        assert!(!host.snapshot(&id).expect("mounted").accept_enabled);
        host.dispatch(&id, DialogCommand::Input("my-project".to_string()));
        let snapshot = host.snapshot(&id).expect("mounted");
        assert!(snapshot.accept_enabled);
        assert_eq!(snapshot.input, "my-project");
        assert_eq!((&mut pending).now_or_never(), None);
    }

    #[test]
    fn listeners_fire_on_open_and_close_until_unsubscribed() {
        let host = DialogHost::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = host.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let (id, _pending) = open(&host, &ElementAttributes::new());
        host.dispatch(&id, DialogCommand::Close);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        host.unsubscribe(subscription);
        let _ = open(&host, &ElementAttributes::new());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_the_host_rejects_pending_decisions() {
        let host = DialogHost::new();
        let (_id, pending) = open(&host, &ElementAttributes::new());
        drop(host);
        assert!(!block_on(pending));
    }
}
