//! # Route Screens
//!
//! The terminal's [`ScreenRenderer`]: each visible route becomes a
//! `RouteScreen` that knows how to draw itself and which keys it answers
//! to. Screens never touch navigation state. A key press becomes a
//! `DemoAction` sent through the screen's sender, and the coordinator
//! takes it from there.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::{ActionSender, ScreenRenderer};
use crate::demo::{DemoAction, DemoRoute};
use crate::tui::event::TuiEvent;

/// Builds one [`RouteScreen`] per visible route.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl ScreenRenderer<DemoRoute> for TerminalRenderer {
    type Screen = RouteScreen;

    fn render(&mut self, route: &DemoRoute, sender: &ActionSender<DemoAction>) -> RouteScreen {
        RouteScreen {
            route: route.clone(),
            sender: sender.clone(),
        }
    }
}

#[derive(Debug)]
pub struct RouteScreen {
    route: DemoRoute,
    sender: ActionSender<DemoAction>,
}

impl RouteScreen {
    pub fn route(&self) -> &DemoRoute {
        &self.route
    }

    /// Key hints shown in the footer, as `(key, label)` pairs.
    pub fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.route {
            DemoRoute::Inbox => &[
                ("1-9", "open thread"),
                ("c", "compose"),
                ("s", "settings"),
                ("a", "about"),
                ("q", "quit"),
            ],
            DemoRoute::Thread(_) => &[
                ("esc", "back"),
                ("n", "next thread"),
                ("c", "compose"),
                ("h", "inbox"),
                ("a", "about"),
            ],
            DemoRoute::About => &[("esc", "back"), ("h", "inbox")],
            DemoRoute::Compose => &[("enter", "send"), ("esc", "discard")],
            DemoRoute::Settings => &[("esc", "close")],
        }
    }

    /// Maps a key to this screen's action, without sending it.
    pub fn action_for(&self, event: &TuiEvent) -> Option<DemoAction> {
        match (&self.route, event) {
            (DemoRoute::Inbox, TuiEvent::Char(c @ '1'..='9')) => {
                c.to_digit(10).map(DemoAction::OpenThread)
            }
            (DemoRoute::Inbox, TuiEvent::Char('s')) => Some(DemoAction::OpenSettings),
            (DemoRoute::Inbox, TuiEvent::Char('q')) => Some(DemoAction::Quit),
            (DemoRoute::Inbox | DemoRoute::Thread(_), TuiEvent::Char('c')) => {
                Some(DemoAction::ComposeNew)
            }
            (DemoRoute::Inbox | DemoRoute::Thread(_), TuiEvent::Char('a')) => {
                Some(DemoAction::ShowAbout)
            }
            (DemoRoute::Thread(id), TuiEvent::Char('n')) => Some(DemoAction::OpenThread(id + 1)),
            (
                DemoRoute::Thread(_) | DemoRoute::About,
                TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::Char('b'),
            ) => Some(DemoAction::Back),
            (DemoRoute::Thread(_) | DemoRoute::About, TuiEvent::Char('h')) => {
                Some(DemoAction::Home)
            }
            (DemoRoute::Compose, TuiEvent::Enter) => Some(DemoAction::SendDraft),
            (DemoRoute::Compose, TuiEvent::Escape) => Some(DemoAction::CloseCompose),
            (DemoRoute::Settings, TuiEvent::Escape) => Some(DemoAction::CloseSettings),
            _ => None,
        }
    }

    /// Sends the action bound to `event`, returning it if there was one.
    pub fn handle_event(&self, event: &TuiEvent) -> Option<DemoAction> {
        let action = self.action_for(event)?;
        self.sender.send(action.clone());
        Some(action)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let accent = match self.route {
            DemoRoute::Compose => Color::Yellow,
            DemoRoute::Settings => Color::Magenta,
            _ => Color::Cyan,
        };

        let mut lines = vec![
            Line::from(Span::styled(
                self.route.title(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(body(&self.route).into_iter().map(Line::from));
        lines.push(Line::default());

        let hints: Vec<Span> = self
            .bindings()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), Style::default().fg(Color::Black).bg(accent)),
                    Span::raw(format!(" {label}  ")),
                ]
            })
            .collect();
        lines.push(Line::from(hints));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(self.route.title())
                    .border_style(Style::default().fg(accent)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn body(route: &DemoRoute) -> Vec<String> {
    match route {
        DemoRoute::Inbox => (1..=5)
            .map(|id| format!("{id}. Message thread #{id}"))
            .collect(),
        DemoRoute::Thread(id) => vec![
            format!("Conversation #{id}"),
            "Threads only open from the inbox, so 'n' is rejected here.".to_string(),
        ],
        DemoRoute::Compose => vec![
            "To: everyone@example.com".to_string(),
            "Draft body…".to_string(),
        ],
        DemoRoute::Settings => vec![
            "Full-screen cover. While it is up, no sheet can be presented.".to_string(),
        ],
        DemoRoute::About => vec![format!("Wayfinder v{}", env!("CARGO_PKG_VERSION"))],
    }
}
