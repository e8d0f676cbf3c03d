//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use serde::Serialize;

use crate::core::coordinator::Coordinator;
use crate::core::error::NavigationError;
use crate::core::route::NavigationRoute;
use crate::core::state::NavigationState;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TestRoute {
    Home,
    Detail(u32),
    Settings,
    Compose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestAction {
    Open(TestRoute),
    Back,
    PopToRoot,
    ShowSheet(TestRoute),
    ShowFullScreen(TestRoute),
    DismissSheet,
    DismissFullScreen,
}

impl NavigationRoute for TestRoute {
    type Action = TestAction;
}

/// Applies `action` to `nav`, returning the navigation error if any.
pub fn apply(
    action: TestAction,
    nav: &mut NavigationState<TestRoute>,
) -> Result<(), NavigationError> {
    match action {
        TestAction::Open(route) => nav.push(route),
        TestAction::Back => nav.pop().map(|_| ()),
        TestAction::PopToRoot => {
            nav.pop_to_root();
            Ok(())
        }
        TestAction::ShowSheet(route) => nav.present_sheet(route),
        TestAction::ShowFullScreen(route) => nav.present_full_screen(route),
        TestAction::DismissSheet => {
            nav.dismiss_sheet();
            Ok(())
        }
        TestAction::DismissFullScreen => {
            nav.dismiss_full_screen();
            Ok(())
        }
    }
}

/// Records every action it handles and every navigation error it hits.
#[derive(Debug, Default)]
pub struct RecordingCoordinator {
    pub handled: Vec<TestAction>,
    pub errors: Vec<NavigationError>,
}

impl Coordinator for RecordingCoordinator {
    type Route = TestRoute;

    fn handle(&mut self, action: TestAction, nav: &mut NavigationState<TestRoute>) {
        self.handled.push(action.clone());
        if let Err(e) = apply(action, nav) {
            self.errors.push(e);
        }
    }
}

/// Two routes deep, and `Compose` may only ever be presented, never pushed.
#[derive(Debug, Default)]
pub struct ShallowCoordinator;

impl Coordinator for ShallowCoordinator {
    type Route = TestRoute;

    const MAX_NAVIGATION_DEPTH: usize = 2;

    fn validate_navigation(
        to: &TestRoute,
        _from: Option<&TestRoute>,
    ) -> Result<(), NavigationError> {
        if *to == TestRoute::Compose {
            return Err(NavigationError::InvalidRoute(
                "compose is presented as a sheet".to_string(),
            ));
        }
        Ok(())
    }

    fn handle(&mut self, action: TestAction, nav: &mut NavigationState<TestRoute>) {
        let _ = apply(action, nav);
    }
}
