//! # Demo Mailbox
//!
//! A small coordinator used by the `wayfinder` binary, both in the terminal
//! client and in headless mode. Threads open from the inbox, compose is a
//! sheet, settings is a full-screen cover.

use serde::Serialize;

use crate::core::{Coordinator, NavigationError, NavigationRoute, NavigationState};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum DemoRoute {
    Inbox,
    Thread(u32),
    Compose,
    Settings,
    About,
}

impl DemoRoute {
    pub fn title(&self) -> String {
        match self {
            DemoRoute::Inbox => "Inbox".to_string(),
            DemoRoute::Thread(id) => format!("Thread #{id}"),
            DemoRoute::Compose => "Compose".to_string(),
            DemoRoute::Settings => "Settings".to_string(),
            DemoRoute::About => "About".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAction {
    OpenThread(u32),
    Back,
    Home,
    ComposeNew,
    CloseCompose,
    SendDraft,
    OpenSettings,
    CloseSettings,
    ShowAbout,
    Quit,
}

impl NavigationRoute for DemoRoute {
    type Action = DemoAction;
}

#[derive(Debug)]
pub struct DemoCoordinator {
    pub status: String,
    pub last_error: Option<NavigationError>,
    pub drafts_sent: u32,
    pub quit_requested: bool,
}

impl Default for DemoCoordinator {
    fn default() -> Self {
        Self {
            status: String::from("Welcome to Wayfinder!"),
            last_error: None,
            drafts_sent: 0,
            quit_requested: false,
        }
    }
}

impl DemoCoordinator {
    fn record(&mut self, result: Result<(), NavigationError>, ok_status: impl Into<String>) {
        match result {
            Ok(()) => {
                self.status = ok_status.into();
                self.last_error = None;
            }
            Err(e) => {
                self.status = e.to_string();
                self.last_error = Some(e);
            }
        }
    }
}

impl Coordinator for DemoCoordinator {
    type Route = DemoRoute;

    const MAX_NAVIGATION_DEPTH: usize = 8;

    fn validate_navigation(
        to: &DemoRoute,
        from: Option<&DemoRoute>,
    ) -> Result<(), NavigationError> {
        match (to, from) {
            (DemoRoute::Compose | DemoRoute::Settings, _) => Err(NavigationError::InvalidRoute(
                format!("{} is only shown as a modal", to.title()),
            )),
            (DemoRoute::Thread(_), Some(DemoRoute::Inbox)) => Ok(()),
            (DemoRoute::Thread(_), _) => Err(NavigationError::NotAllowed(
                "threads open from the inbox".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn handle(&mut self, action: DemoAction, nav: &mut NavigationState<DemoRoute>) {
        match action {
            DemoAction::OpenThread(id) => {
                let result = nav.push(DemoRoute::Thread(id));
                self.record(result, format!("Opened thread #{id}"));
            }
            DemoAction::ShowAbout => {
                let result = nav.push(DemoRoute::About);
                self.record(result, "About Wayfinder");
            }
            DemoAction::Back => {
                // The root screen stays put.
                let result = if nav.depth() > 1 {
                    nav.pop().map(|_| ())
                } else {
                    Err(NavigationError::NotAllowed("already at the root".to_string()))
                };
                self.record(result, "Back");
            }
            DemoAction::Home => {
                nav.pop_to_root();
                self.record(Ok(()), "Home");
            }
            DemoAction::ComposeNew => {
                if nav.try_present_sheet(DemoRoute::Compose) {
                    self.record(Ok(()), "New draft");
                } else {
                    self.status = "Close the open screen before composing".to_string();
                }
            }
            DemoAction::SendDraft => {
                nav.dismiss_sheet();
                self.drafts_sent += 1;
                self.record(Ok(()), format!("Sent ({} total)", self.drafts_sent));
            }
            DemoAction::CloseCompose => {
                nav.dismiss_sheet();
                self.record(Ok(()), "Draft discarded");
            }
            DemoAction::OpenSettings => {
                let result = nav.present_full_screen(DemoRoute::Settings);
                self.record(result, "Settings");
            }
            DemoAction::CloseSettings => {
                nav.dismiss_full_screen();
                self.record(Ok(()), "Settings closed");
            }
            DemoAction::Quit => {
                self.quit_requested = true;
            }
        }
    }
}

/// The walk performed by `wayfinder --headless`.
pub fn scripted_walk() -> Vec<DemoAction> {
    vec![
        DemoAction::OpenThread(1),
        DemoAction::OpenThread(2),
        DemoAction::ShowAbout,
        DemoAction::ComposeNew,
        DemoAction::OpenSettings,
        DemoAction::SendDraft,
        DemoAction::Home,
        DemoAction::OpenThread(3),
        DemoAction::OpenSettings,
        DemoAction::Quit,
    ]
}
