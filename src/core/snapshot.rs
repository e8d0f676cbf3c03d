//! Point-in-time copies of navigation state, for assertions and debug dumps.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::route::NavigationRoute;

/// A read-only copy of a [`NavigationState`](crate::core::state::NavigationState).
///
/// Equality ignores `captured_at`: two snapshots are equal when they
/// describe the same stack and presentations.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationSnapshot<R: NavigationRoute> {
    pub navigation_path: Vec<R>,
    pub sheet_route: Option<R>,
    pub full_screen_route: Option<R>,
    pub captured_at: DateTime<Utc>,
}

impl<R: NavigationRoute> NavigationSnapshot<R> {
    pub fn new(
        navigation_path: Vec<R>,
        sheet_route: Option<R>,
        full_screen_route: Option<R>,
    ) -> Self {
        Self {
            navigation_path,
            sheet_route,
            full_screen_route,
            captured_at: Utc::now(),
        }
    }

    pub fn current_route(&self) -> Option<&R> {
        self.navigation_path.last()
    }
}

impl<R: NavigationRoute> PartialEq for NavigationSnapshot<R> {
    fn eq(&self, other: &Self) -> bool {
        self.navigation_path == other.navigation_path
            && self.sheet_route == other.sheet_route
            && self.full_screen_route == other.full_screen_route
    }
}

impl<R: NavigationRoute> Eq for NavigationSnapshot<R> {}
