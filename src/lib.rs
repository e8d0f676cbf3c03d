//! Wayfinder: coordinator-driven navigation state for UI applications.

pub mod core;
pub mod demo;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    ActionDispatcher, ActionOf, ActionSender, ActionSubscription, Coordinator, CoordinatorHost,
    DEFAULT_MAX_NAVIGATION_DEPTH, NavigationError, NavigationRoute, NavigationSnapshot,
    NavigationState, NavigationStateBuilder, ScreenRenderer, StartPolicy, VisibleScreens,
};
