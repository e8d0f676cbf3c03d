//! # Coordinators
//!
//! A [`Coordinator`] is the application's reaction logic: it receives the
//! actions its screens emit and drives a [`NavigationState`] in response.
//! A [`CoordinatorHost`] owns one coordinator together with its state and
//! action channel:
//!
//! ```text
//! CoordinatorHost<C>
//! ├── coordinator: C                       // app-supplied handle()
//! ├── navigation: NavigationState<Route>   // stack + sheet + full screen
//! ├── dispatcher: ActionDispatcher<Action> // screens get send-only handles
//! ├── subscription: Option<..>             // the one live binding
//! └── torn_down: bool                      // set by cleanup()
//! ```
//!
//! The host lives on the UI context. Screens may `send` from anywhere;
//! actions are delivered to `handle` only when the host drains them with
//! [`pump`](CoordinatorHost::pump) or [`run`](CoordinatorHost::run).

use log::debug;

use crate::core::config::ResolvedConfig;
use crate::core::dispatcher::{ActionDispatcher, ActionSender, ActionSubscription};
use crate::core::error::NavigationError;
use crate::core::render::{ScreenRenderer, VisibleScreens};
use crate::core::route::{ActionOf, NavigationRoute};
use crate::core::snapshot::NavigationSnapshot;
use crate::core::state::{DEFAULT_MAX_NAVIGATION_DEPTH, NavigationState, StartPolicy};

pub trait Coordinator {
    type Route: NavigationRoute;

    /// Stack capacity for this coordinator type.
    const MAX_NAVIGATION_DEPTH: usize = DEFAULT_MAX_NAVIGATION_DEPTH;

    /// Consulted before every non-duplicate push with `(new_route, current_top)`.
    fn validate_navigation(
        _to: &Self::Route,
        _from: Option<&Self::Route>,
    ) -> Result<(), NavigationError> {
        Ok(())
    }

    /// Reacts to one action from a screen.
    fn handle(&mut self, action: ActionOf<Self::Route>, nav: &mut NavigationState<Self::Route>);
}

pub struct CoordinatorHost<C: Coordinator> {
    coordinator: C,
    navigation: NavigationState<C::Route>,
    dispatcher: ActionDispatcher<ActionOf<C::Route>>,
    subscription: Option<ActionSubscription<ActionOf<C::Route>>>,
    torn_down: bool,
}

impl<C: Coordinator> CoordinatorHost<C> {
    pub fn new(coordinator: C) -> Self {
        Self::with_config(coordinator, &ResolvedConfig::default())
    }

    /// Builds the host's state from resolved configuration.
    ///
    /// `config.max_depth` (file, `WAYFINDER_MAX_DEPTH` or `--max-depth`) is a
    /// process-wide ceiling: when set it replaces `C::MAX_NAVIGATION_DEPTH`
    /// for every coordinator type built through this function. Use
    /// [`new`](Self::new) to keep the type's own depth.
    pub fn with_config(coordinator: C, config: &ResolvedConfig) -> Self {
        let validate: fn(&C::Route, Option<&C::Route>) -> Result<(), NavigationError> =
            C::validate_navigation;
        let navigation = NavigationState::builder()
            .max_depth(config.max_depth.unwrap_or(C::MAX_NAVIGATION_DEPTH))
            .validator(validate)
            .start_policy(config.start_policy)
            .build();
        let dispatcher = ActionDispatcher::new();
        if config.log_actions {
            dispatcher.enable_debug_logging();
        }
        Self {
            coordinator,
            navigation,
            dispatcher,
            subscription: None,
            torn_down: false,
        }
    }

    /// Attaches the host to its dispatcher. Calling it again while bound
    /// does nothing; a subscription the dispatcher no longer feeds is
    /// replaced.
    pub fn bind_action_dispatcher(&mut self) {
        if self.is_bound() {
            return;
        }
        if self.subscription.take().is_some() {
            debug!("Dispatcher was unbound behind the host, rebinding");
            self.dispatcher.unbind();
        }
        if let Some(subscription) = self.dispatcher.bind() {
            self.subscription = Some(subscription);
            self.torn_down = false;
        }
    }

    /// Binds the dispatcher and pushes the initial route.
    pub fn start(&mut self, initial_route: C::Route) -> Result<(), NavigationError> {
        self.bind_action_dispatcher();
        self.navigation.start(initial_route)
    }

    /// Delivers every action already sent, in order. Returns how many were
    /// handed to the coordinator.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while !self.torn_down {
            let Some(action) = self.subscription.as_mut().and_then(|s| s.try_next()) else {
                break;
            };
            if self.deliver(action) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Delivers actions as they arrive until the host is torn down or the
    /// channel closes.
    pub async fn run(&mut self) {
        while self.step().await {}
    }

    /// Waits for one action and delivers it. Returns `false` once nothing
    /// more can arrive (unbound, torn down, or channel closed).
    pub async fn step(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        let next = subscription.next().await;
        match next {
            Some(action) => self.deliver(action),
            None => false,
        }
    }

    /// Hands one action to the coordinator. After teardown this is a silent
    /// no-op and returns `false`.
    pub fn deliver(&mut self, action: ActionOf<C::Route>) -> bool {
        if self.torn_down {
            debug!("Coordinator torn down, discarding action: {:?}", action);
            return false;
        }
        self.coordinator.handle(action, &mut self.navigation);
        true
    }

    /// Runs `handle` directly, bypassing the channel.
    pub fn simulate_action(&mut self, action: ActionOf<C::Route>) -> bool {
        self.deliver(action)
    }

    /// Clears all navigation state and releases the dispatcher binding.
    /// Safe to call repeatedly; also runs on drop.
    pub fn cleanup(&mut self) {
        self.subscription = None;
        self.dispatcher.unbind();
        self.navigation.cleanup();
        if !self.torn_down {
            debug!("Coordinator cleaned up: {}", std::any::type_name::<C>());
        }
        self.torn_down = true;
    }

    /// Renders the top of stack and any presented modal.
    pub fn render_visible<S>(&self, renderer: &mut S) -> VisibleScreens<S::Screen>
    where
        S: ScreenRenderer<C::Route>,
    {
        let nav = &self.navigation;
        let sender = self.dispatcher.sender();
        VisibleScreens {
            top: nav
                .current_route()
                .map(|route| renderer.render(route, &sender)),
            sheet: nav.sheet().map(|route| renderer.render(route, &sender)),
            full_screen: nav
                .full_screen()
                .map(|route| renderer.render(route, &sender)),
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn current_route(&self) -> Option<&C::Route> {
        self.navigation.current_route()
    }

    pub fn navigation_history(&self) -> &[C::Route] {
        self.navigation.stack()
    }

    pub fn presented_sheet(&self) -> Option<&C::Route> {
        self.navigation.sheet()
    }

    pub fn presented_full_screen(&self) -> Option<&C::Route> {
        self.navigation.full_screen()
    }

    pub fn snapshot(&self) -> NavigationSnapshot<C::Route> {
        self.navigation.snapshot()
    }

    pub fn navigation(&self) -> &NavigationState<C::Route> {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState<C::Route> {
        &mut self.navigation
    }

    pub fn coordinator(&self) -> &C {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut C {
        &mut self.coordinator
    }

    /// A send-only handle for screens and background tasks.
    pub fn dispatcher(&self) -> ActionSender<ActionOf<C::Route>> {
        self.dispatcher.sender()
    }

    /// True while the host holds the subscription the dispatcher feeds.
    pub fn is_bound(&self) -> bool {
        self.subscription.is_some() && self.dispatcher.is_bound()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.navigation.start_policy()
    }
}

impl<C: Coordinator> Drop for CoordinatorHost<C> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
