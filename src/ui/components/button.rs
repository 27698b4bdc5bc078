//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the submit button; while loading it reads "Sending..." and is
/// drawn disabled
pub fn render_submit_button(frame: &mut Frame, area: Rect, is_loading: bool, is_selected: bool) {
    let (content, border_style, text_style) = if is_loading {
        (
            "⟳ Sending...",
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_selected {
        (
            "Send Message",
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Send Message",
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Green),
        )
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
