use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::core::{CoordinatorHost, VisibleScreens};
use crate::demo::{DemoCoordinator, DemoRoute};
use crate::tui::screen::RouteScreen;

pub fn draw_ui(
    frame: &mut Frame,
    host: &CoordinatorHost<DemoCoordinator>,
    screens: &VisibleScreens<RouteScreen>,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    frame.render_widget(
        breadcrumb(host.navigation_history(), host.navigation().max_depth()),
        title_area,
    );

    if let Some(top) = &screens.top {
        top.render(frame, main_area);
    } else {
        frame.render_widget(Paragraph::new("Nothing to show"), main_area);
    }

    if let Some(sheet) = &screens.sheet {
        let sheet_area = centered(main_area, 60, 50);
        frame.render_widget(Clear, sheet_area);
        sheet.render(frame, sheet_area);
    }

    if let Some(cover) = &screens.full_screen {
        frame.render_widget(Clear, main_area);
        cover.render(frame, main_area);
    }

    let coordinator = host.coordinator();
    let status_style = if coordinator.last_error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Span::styled(coordinator.status.as_str(), status_style),
        status_area,
    );
}

/// `Inbox › Thread #2 › About   [3/8]`
fn breadcrumb(stack: &[DemoRoute], max_depth: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, route) in stack.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i + 1 == stack.len() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(route.title(), style));
    }
    spans.push(Span::styled(
        format!("   [{}/{}]", stack.len(), max_depth),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
