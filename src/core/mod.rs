//! # Core Navigation Logic
//!
//! Everything here is toolkit-agnostic. It knows nothing about terminals,
//! widgets or windows.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationState      │
//!                    │  • ActionDispatcher     │
//!                    │  • CoordinatorHost      │
//!                    │                         │
//!                    │  No I/O in state ops.   │
//!                    └───────────┬─────────────┘
//!                                │ ScreenRenderer
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  headless  │      │   other    │
//!     │  (ratatui) │      │  scripts   │      │  toolkits  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: the `NavigationRoute` trait
//! - [`state`]: `NavigationState`, the stack / sheet / full-screen state machine
//! - [`dispatcher`]: the action channel from screens to coordinators
//! - [`coordinator`]: the `Coordinator` trait and `CoordinatorHost` façade
//! - [`render`]: the contract a screen renderer fulfils
//! - [`snapshot`]: timestamped copies of navigation state
//! - [`config`]: layered configuration
//! - [`error`]: `NavigationError`

pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub mod error;
pub mod render;
pub mod route;
pub mod snapshot;
pub mod state;

pub use coordinator::{Coordinator, CoordinatorHost};
pub use dispatcher::{ActionDispatcher, ActionSender, ActionSubscription};
pub use error::NavigationError;
pub use render::{ScreenRenderer, VisibleScreens};
pub use route::{ActionOf, NavigationRoute};
pub use snapshot::NavigationSnapshot;
pub use state::{DEFAULT_MAX_NAVIGATION_DEPTH, NavigationState, NavigationStateBuilder, StartPolicy};
