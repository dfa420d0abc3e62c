//! Single-settlement decision future.
//!
//! The resolver side is consumed on settlement, so a decision can be
//! delivered at most once.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

/// Create a linked resolver/future pair.
#[must_use]
pub fn decision_channel() -> (DecisionResolver, PendingDecision) {
    let (tx, rx) = oneshot::channel();
    (DecisionResolver { tx }, PendingDecision { rx })
}

/// Sending half of a decision. Settles by value.
#[derive(Debug)]
pub struct DecisionResolver {
    tx: oneshot::Sender<bool>,
}

impl DecisionResolver {
    /// Deliver the decision to the awaiting caller.
    pub fn resolve(self, confirmed: bool) {
        // The caller may have stopped waiting; the decision is simply dropped then.
        if self.tx.send(confirmed).is_err() {
            tracing::debug!(confirmed, "decision receiver dropped before settlement");
        }
    }

    /// Whether the awaiting side has gone away.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_canceled()
    }
}

/// Future side of a decision. Yields `false` if the resolver is dropped unsettled.
#[derive(Debug)]
#[must_use = "a pending decision does nothing unless awaited"]
pub struct PendingDecision {
    rx: oneshot::Receiver<bool>,
}

impl PendingDecision {
    /// An already-settled decision.
    pub fn ready(confirmed: bool) -> Self {
        let (resolver, pending) = decision_channel();
        resolver.resolve(confirmed);
        pending
    }
}

impl Future for PendingDecision {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.unwrap_or(false))
    }
}
