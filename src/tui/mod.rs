//! # TUI Adapter
//!
//! The ratatui-specific layer. Each frame it asks the coordinator host for
//! the visible screens, draws them, and hands key presses to the topmost
//! screen, which turns them into actions.
//!
//! ```text
//! key ─▶ topmost RouteScreen ─▶ dispatcher.send ─▶ host.pump() ─▶ handle()
//!                                                                   │
//!  draw ◀── render_visible() ◀── NavigationState ◀──────────────────┘
//! ```
//!
//! This is the only module that knows about ratatui and crossterm.

mod event;
pub mod screen;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;
use log::{debug, info};

use crate::core::config::ResolvedConfig;
use crate::core::{CoordinatorHost, VisibleScreens};
use crate::demo::{DemoCoordinator, DemoRoute};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screen::{RouteScreen, TerminalRenderer};

/// Restores the terminal even when the loop exits through `?`.
struct TerminalGuard;

impl TerminalGuard {
    /// Enters raw mode and the alternate screen. The guard exists before
    /// anything else can fail, so a failed `Hide` still restores.
    fn enter() -> std::io::Result<(Self, DefaultTerminal)> {
        let terminal = ratatui::init();
        let guard = Self;
        execute!(stdout(), Hide)?;
        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        ratatui::restore();
    }
}

/// The screen that receives key presses: full-screen cover, then sheet,
/// then the top of the stack.
fn topmost(screens: &VisibleScreens<RouteScreen>) -> Option<&RouteScreen> {
    screens
        .full_screen
        .as_ref()
        .or(screens.sheet.as_ref())
        .or(screens.top.as_ref())
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut host = CoordinatorHost::with_config(DemoCoordinator::default(), config);
    if let Err(e) = host.start(DemoRoute::Inbox) {
        // Strict start with a zero depth; there is nothing to show.
        return Err(std::io::Error::other(e));
    }
    let mut renderer = TerminalRenderer;

    let (_guard, mut terminal) = TerminalGuard::enter()?;
    info!("Terminal client started");

    loop {
        let screens = host.render_visible(&mut renderer);
        terminal.draw(|f| ui::draw_ui(f, &host, &screens))?;

        let first_event = poll_event_timeout(Duration::from_millis(250))?;
        let mut pending = Vec::new();
        if let Some(event) = first_event {
            pending.push(event);
            while let Some(event) = poll_event_immediate()? {
                pending.push(event);
            }
        }

        for event in &pending {
            match event {
                TuiEvent::ForceQuit => host.coordinator_mut().quit_requested = true,
                TuiEvent::Resize => {}
                _ => {
                    if let Some(action) = topmost(&screens).and_then(|s| s.handle_event(event)) {
                        debug!("Screen sent {:?}", action);
                    }
                }
            }
        }

        host.pump();
        if host.coordinator().quit_requested {
            break;
        }
    }

    host.cleanup();
    info!("Terminal client stopped");
    Ok(())
}
