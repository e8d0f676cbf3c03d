//! # Screen Rendering Contract
//!
//! The core never builds screens. A renderer turns a route into whatever
//! the UI toolkit displays and wires the screen's interactions to the
//! send-only handle it is handed. Renderers only observe navigation state;
//! the one way back in is `sender.send(action)`.

use crate::core::dispatcher::ActionSender;
use crate::core::route::{ActionOf, NavigationRoute};

pub trait ScreenRenderer<R: NavigationRoute> {
    /// What the toolkit displays for one route.
    type Screen;

    fn render(&mut self, route: &R, sender: &ActionSender<ActionOf<R>>) -> Self::Screen;
}

/// Screens for everything currently visible, bottom layer first.
#[derive(Debug)]
pub struct VisibleScreens<S> {
    /// The top of the navigation stack, if any.
    pub top: Option<S>,
    pub sheet: Option<S>,
    pub full_screen: Option<S>,
}
