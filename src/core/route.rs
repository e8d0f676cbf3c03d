//! # Routes
//!
//! A route is a plain value naming one screen of the application. The
//! navigation state never looks inside a route: it only compares routes
//! for equality (duplicate suppression) and hashes them when a caller
//! wants to key presentations or stack entries by identity.
//!
//! ```text
//! enum HomeRoute { Inbox, Message(u32), Compose }
//!        │
//!        └── type Action = HomeAction   // what screens built from it can emit
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// An application-defined navigation destination.
///
/// Each route type names the action type its screens emit. Actions travel
/// through an [`ActionSender`](crate::core::dispatcher::ActionSender)
/// to the coordinator that owns the route's navigation state.
pub trait NavigationRoute: Clone + Eq + Hash + Debug + 'static {
    /// Events a screen built from this route can send.
    type Action: Debug + Send + 'static;
}

/// Shorthand for the action type of a route.
pub type ActionOf<R> = <R as NavigationRoute>::Action;
