//! # Navigation State
//!
//! The mutable core: a route stack plus one modal slot viewed two ways.
//!
//! ```text
//! NavigationState<R>
//! ├── stack: Vec<R>            // back = visible screen, len ≤ max_depth
//! ├── sheet: Option<R>         // dismissible modal   ┐ never both Some
//! ├── full_screen: Option<R>   // full-screen modal   ┘
//! ├── max_depth: usize         // default 20
//! ├── validator                // optional push hook
//! └── start_policy             // what start() does when its push fails
//! ```
//!
//! Every operation validates before it mutates. A failed operation leaves
//! all three fields exactly as they were.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::error::NavigationError;
use crate::core::route::NavigationRoute;
use crate::core::snapshot::NavigationSnapshot;

/// Default stack capacity.
pub const DEFAULT_MAX_NAVIGATION_DEPTH: usize = 20;

/// Hook consulted by `push` with `(new_route, current_top)`.
pub type RouteValidator<R> =
    Box<dyn Fn(&R, Option<&R>) -> Result<(), NavigationError> + Send + Sync>;

/// What `start` does when pushing the initial route fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Log the failure and report success.
    #[default]
    BestEffort,
    /// Return the push failure to the caller.
    Strict,
}

pub struct NavigationState<R: NavigationRoute> {
    stack: Vec<R>,
    sheet: Option<R>,
    full_screen: Option<R>,
    max_depth: usize,
    validator: Option<RouteValidator<R>>,
    start_policy: StartPolicy,
}

impl<R: NavigationRoute> fmt::Debug for NavigationState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("stack", &self.stack)
            .field("sheet", &self.sheet)
            .field("full_screen", &self.full_screen)
            .field("max_depth", &self.max_depth)
            .field("has_validator", &self.validator.is_some())
            .field("start_policy", &self.start_policy)
            .finish()
    }
}

impl<R: NavigationRoute> Default for NavigationState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NavigationRoute> NavigationState<R> {
    /// Empty state with the default depth, no validator and best-effort start.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> NavigationStateBuilder<R> {
        NavigationStateBuilder::default()
    }

    // ------------------------------------------------------------------
    // Stack
    // ------------------------------------------------------------------

    /// Pushes `route` onto the stack.
    ///
    /// Pushing the route that is already on top succeeds without changing
    /// anything. Only the top is compared: `[a, b]` followed by `push(a)`
    /// yields `[a, b, a]`.
    pub fn push(&mut self, route: R) -> Result<(), NavigationError> {
        if self.stack.len() >= self.max_depth {
            return Err(NavigationError::StackOverflow {
                max_depth: self.max_depth,
            });
        }

        if self.stack.last() == Some(&route) {
            debug!("Ignoring duplicate route: {:?}", route);
            return Ok(());
        }

        if let Some(validate) = &self.validator {
            validate(&route, self.stack.last())?;
        }

        debug!(
            "Pushed route: {:?}, stack depth: {}",
            route,
            self.stack.len() + 1
        );
        self.stack.push(route);
        Ok(())
    }

    /// Removes and returns the top of the stack.
    pub fn pop(&mut self) -> Result<R, NavigationError> {
        let route = self.stack.pop().ok_or_else(|| {
            NavigationError::NotAllowed("cannot pop from empty navigation stack".to_string())
        })?;
        debug!(
            "Popped route: {:?}, remaining depth: {}",
            route,
            self.stack.len()
        );
        Ok(route)
    }

    /// Collapses the stack to its oldest entry. No-op when empty.
    pub fn pop_to_root(&mut self) {
        if self.stack.len() > 1 {
            self.stack.truncate(1);
            debug!("Popped to root: {:?}", self.stack.first());
        }
    }

    /// Pushes `initial_route` if nothing has been pushed yet.
    ///
    /// A failing push is either swallowed with a warning or returned,
    /// depending on the configured [`StartPolicy`].
    pub fn start(&mut self, initial_route: R) -> Result<(), NavigationError> {
        if !self.stack.is_empty() {
            return Ok(());
        }
        match self.push(initial_route) {
            Ok(()) => Ok(()),
            Err(e) => match self.start_policy {
                StartPolicy::BestEffort => {
                    warn!("Initial route could not be pushed: {}", e);
                    Ok(())
                }
                StartPolicy::Strict => Err(e),
            },
        }
    }

    // ------------------------------------------------------------------
    // Modal presentation
    // ------------------------------------------------------------------

    pub fn present_sheet(&mut self, route: R) -> Result<(), NavigationError> {
        self.ensure_no_presentation()?;
        debug!("Presenting sheet: {:?}", route);
        self.sheet = Some(route);
        Ok(())
    }

    pub fn present_full_screen(&mut self, route: R) -> Result<(), NavigationError> {
        self.ensure_no_presentation()?;
        debug!("Presenting full screen: {:?}", route);
        self.full_screen = Some(route);
        Ok(())
    }

    /// Like [`present_sheet`](Self::present_sheet), reporting failure as `false`.
    pub fn try_present_sheet(&mut self, route: R) -> bool {
        match self.present_sheet(route) {
            Ok(()) => true,
            Err(e) => {
                debug!("Failed to present sheet: {}", e);
                false
            }
        }
    }

    /// Like [`present_full_screen`](Self::present_full_screen), reporting failure as `false`.
    pub fn try_present_full_screen(&mut self, route: R) -> bool {
        match self.present_full_screen(route) {
            Ok(()) => true,
            Err(e) => {
                debug!("Failed to present full screen: {}", e);
                false
            }
        }
    }

    pub fn dismiss_sheet(&mut self) {
        self.sheet = None;
    }

    pub fn dismiss_full_screen(&mut self) {
        self.full_screen = None;
    }

    fn ensure_no_presentation(&self) -> Result<(), NavigationError> {
        if let Some(sheet) = &self.sheet {
            return Err(NavigationError::PresentationConflict(format!(
                "sheet already presented: {sheet:?}"
            )));
        }
        if let Some(full_screen) = &self.full_screen {
            return Err(NavigationError::PresentationConflict(format!(
                "full screen already presented: {full_screen:?}"
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Empties the stack and both modal slots.
    pub fn cleanup(&mut self) {
        self.stack.clear();
        self.sheet = None;
        self.full_screen = None;
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn current_route(&self) -> Option<&R> {
        self.stack.last()
    }

    /// The whole stack, oldest first.
    pub fn stack(&self) -> &[R] {
        &self.stack
    }

    pub fn sheet(&self) -> Option<&R> {
        self.sheet.as_ref()
    }

    pub fn full_screen(&self) -> Option<&R> {
        self.full_screen.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy
    }

    /// True while either modal slot is occupied.
    pub fn has_presentation(&self) -> bool {
        self.sheet.is_some() || self.full_screen.is_some()
    }

    pub fn snapshot(&self) -> NavigationSnapshot<R> {
        NavigationSnapshot::new(
            self.stack.clone(),
            self.sheet.clone(),
            self.full_screen.clone(),
        )
    }
}

/// Builds a [`NavigationState`] with a non-default depth, validator or
/// start policy.
pub struct NavigationStateBuilder<R: NavigationRoute> {
    max_depth: usize,
    validator: Option<RouteValidator<R>>,
    start_policy: StartPolicy,
}

impl<R: NavigationRoute> Default for NavigationStateBuilder<R> {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_NAVIGATION_DEPTH,
            validator: None,
            start_policy: StartPolicy::default(),
        }
    }
}

impl<R: NavigationRoute> NavigationStateBuilder<R> {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&R, Option<&R>) -> Result<(), NavigationError> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validate));
        self
    }

    pub fn start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }

    pub fn build(self) -> NavigationState<R> {
        NavigationState {
            stack: Vec::new(),
            sheet: None,
            full_screen: None,
            max_depth: self.max_depth,
            validator: self.validator,
            start_policy: self.start_policy,
        }
    }
}
