//! # Action Dispatcher
//!
//! Decouples "a screen emitted an event" from "the coordinator reacted".
//!
//! ```text
//!   any thread                          UI context (host owner)
//!  ┌──────────────┐   unbounded mpsc   ┌──────────────────────┐
//!  │ dispatcher   │ ─────────────────▶ │ ActionSubscription   │──▶ handle()
//!  │   .send(a)   │                    │   .try_next()/next() │
//!  └──────────────┘                    └──────────────────────┘
//! ```
//!
//! The dispatcher stays with the owner of the subscription. Screens get an
//! [`ActionSender`], a cheap clonable handle that can only `send`. At most
//! one subscription is live at a time; actions sent while nothing is bound
//! are dropped, not queued.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

struct Shared<A> {
    sender: Mutex<Option<UnboundedSender<A>>>,
    log_actions: AtomicBool,
}

impl<A> Shared<A> {
    // A panic while holding this lock cannot leave the Option half-written,
    // so a poisoned guard is still usable.
    fn sender(&self) -> MutexGuard<'_, Option<UnboundedSender<A>>> {
        self.sender.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_bound(&self) -> bool {
        self.sender().as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

/// Owner side of the action channel: binds, unbinds and sends.
pub struct ActionDispatcher<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for ActionDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> Default for ActionDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for ActionDispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("bound", &self.is_bound())
            .field("log_actions", &self.shared.log_actions.load(Ordering::Relaxed))
            .finish()
    }
}

impl<A> ActionDispatcher<A> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                sender: Mutex::new(None),
                log_actions: AtomicBool::new(false),
            }),
        }
    }

    /// Attaches the single subscriber.
    ///
    /// Returns `None` when a subscription is already live, so binding twice
    /// never produces two deliveries per action.
    pub fn bind(&self) -> Option<ActionSubscription<A>> {
        let mut sender = self.shared.sender();
        if sender.as_ref().is_some_and(|tx| !tx.is_closed()) {
            return None;
        }
        let (tx, rx) = mpsc::unbounded_channel();
        *sender = Some(tx);
        Some(ActionSubscription { receiver: rx })
    }

    /// Releases the binding. Later sends are dropped until the next `bind`.
    pub fn unbind(&self) {
        self.shared.sender().take();
    }

    pub fn is_bound(&self) -> bool {
        self.shared.is_bound()
    }

    /// Logs every action sent from now on, through any handle.
    pub fn enable_debug_logging(&self) {
        self.shared.log_actions.store(true, Ordering::Relaxed);
    }

    /// A send-only handle for screens and background tasks.
    pub fn sender(&self) -> ActionSender<A> {
        ActionSender {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: fmt::Debug> ActionDispatcher<A> {
    /// Publishes `action` to the bound subscriber, if any.
    pub fn send(&self, action: A) {
        self.shared.publish(action);
    }
}

impl<A: fmt::Debug> Shared<A> {
    fn publish(&self, action: A) {
        if self.log_actions.load(Ordering::Relaxed) {
            debug!("Coordinator action: {:?}", action);
        }
        let sender = self.sender();
        match sender.as_ref() {
            Some(tx) => {
                if let Err(mpsc::error::SendError(action)) = tx.send(action) {
                    debug!("Subscriber gone, dropping action: {:?}", action);
                }
            }
            None => debug!("No subscriber bound, dropping action: {:?}", action),
        }
    }
}

/// Send-only view of an [`ActionDispatcher`]. It cannot bind or unbind,
/// so holders never disturb the owner's subscription.
pub struct ActionSender<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> fmt::Debug for ActionSender<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSender")
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<A> ActionSender<A> {
    pub fn is_bound(&self) -> bool {
        self.shared.is_bound()
    }
}

impl<A: fmt::Debug> ActionSender<A> {
    pub fn send(&self, action: A) {
        self.shared.publish(action);
    }
}

/// Receive side of the action channel. Dropping it releases the binding.
#[derive(Debug)]
pub struct ActionSubscription<A> {
    receiver: UnboundedReceiver<A>,
}

impl<A> ActionSubscription<A> {
    /// Returns the next pending action without waiting.
    pub fn try_next(&mut self) -> Option<A> {
        match self.receiver.try_recv() {
            Ok(action) => Some(action),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits for the next action. `None` once the dispatcher was unbound
    /// and every pending action has been received.
    pub async fn next(&mut self) -> Option<A> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Tap {
        A,
        B,
        C,
    }

    #[test]
    fn test_send_before_bind_is_dropped() {
        let dispatcher = ActionDispatcher::new();
        dispatcher.send(Tap::A);
        let mut sub = dispatcher.bind().unwrap();
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_delivers_in_send_order() {
        let dispatcher = ActionDispatcher::new();
        let mut sub = dispatcher.bind().unwrap();
        dispatcher.send(Tap::A);
        dispatcher.send(Tap::B);
        dispatcher.send(Tap::C);
        assert_eq!(sub.try_next(), Some(Tap::A));
        assert_eq!(sub.try_next(), Some(Tap::B));
        assert_eq!(sub.try_next(), Some(Tap::C));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_bind_twice_is_noop() {
        let dispatcher = ActionDispatcher::new();
        let mut sub = dispatcher.bind().unwrap();
        assert!(dispatcher.bind().is_none());
        dispatcher.send(Tap::A);
        assert_eq!(sub.try_next(), Some(Tap::A));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_clones_share_binding() {
        let dispatcher = ActionDispatcher::new();
        let screen_handle = dispatcher.clone();
        let mut sub = dispatcher.bind().unwrap();
        assert!(screen_handle.is_bound());
        screen_handle.send(Tap::B);
        assert_eq!(sub.try_next(), Some(Tap::B));
    }

    #[test]
    fn test_unbind_drops_later_sends_and_allows_rebind() {
        let dispatcher = ActionDispatcher::new();
        let sub = dispatcher.bind().unwrap();
        dispatcher.unbind();
        assert!(!dispatcher.is_bound());
        dispatcher.send(Tap::A);
        drop(sub);

        let mut fresh = dispatcher.bind().unwrap();
        dispatcher.send(Tap::C);
        assert_eq!(fresh.try_next(), Some(Tap::C));
    }

    #[test]
    fn test_dropped_subscription_allows_rebind() {
        let dispatcher = ActionDispatcher::<Tap>::new();
        drop(dispatcher.bind().unwrap());
        assert!(!dispatcher.is_bound());
        assert!(dispatcher.bind().is_some());
    }

    #[test]
    fn test_sender_shares_binding_with_owner() {
        let dispatcher = ActionDispatcher::new();
        let sender = dispatcher.sender();
        assert!(!sender.is_bound());

        let mut sub = dispatcher.bind().unwrap();
        assert!(sender.clone().is_bound());
        sender.send(Tap::A);
        assert_eq!(sub.try_next(), Some(Tap::A));

        dispatcher.unbind();
        assert!(!sender.is_bound());
        sender.send(Tap::B);
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_debug_logging_does_not_change_delivery() {
        let dispatcher = ActionDispatcher::new();
        dispatcher.enable_debug_logging();
        let mut sub = dispatcher.bind().unwrap();
        dispatcher.send(Tap::A);
        assert_eq!(sub.try_next(), Some(Tap::A));
    }
}
