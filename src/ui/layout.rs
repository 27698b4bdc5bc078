//! Layout components (form column, status bar)

use super::forms::split_form;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the centered form column
const FORM_WIDTH: u16 = 72;

const HINTS: &str = "Tab:next  Shift+Tab:prev  Ctrl+S:submit";

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(FORM_WIDTH);
    Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    }
}

/// Rows available to the scrollable part of the form
pub fn form_viewport_height(area: Rect, banner_visible: bool) -> u16 {
    let content = create_layout(area);
    let inner = Block::default().borders(Borders::ALL).inner(content);
    let (_, viewport) = split_form(inner, banner_visible);
    viewport.height
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {HINTS} "),
        Style::default().fg(Color::Gray),
    )];

    if app.state.submit_loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Sending...", Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
