//! Field rendering utilities for forms

use crate::input::{CharCounter, CounterTier};
use crate::state::FormField;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder for an unselected select field
const CHOICE_PLACEHOLDER: &str = "Select a subject";

const COUNTER_NORMAL: Color = Color::Rgb(107, 114, 128);
const COUNTER_WARNING: Color = Color::Rgb(245, 158, 11);
const COUNTER_DANGER: Color = Color::Rgb(239, 68, 68);

fn border_style(field: &FormField, is_active: bool) -> Style {
    match (field.has_error(), is_active) {
        (true, true) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    }
}

/// Draw a form field box, outlined in red while it shows an error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_choice() {
        let value = field.as_text();
        let (shown, style) = if value.is_empty() {
            (CHOICE_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            (value, text_style)
        };
        let mut spans = vec![Span::styled(shown, style)];
        if is_active {
            spans.push(Span::styled("  ◀ ▶", Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        // Keep the cursor line in view once the text outgrows the box
        let inner_height = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(inner_height);
        Paragraph::new(lines.split_off(skip))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the field's error message, if it has one
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(message) = &field.error {
        let line = Line::from(Span::styled(
            format!(" ⚠ {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

pub fn counter_color(tier: CounterTier) -> Color {
    match tier {
        CounterTier::Normal => COUNTER_NORMAL,
        CounterTier::Warning => COUNTER_WARNING,
        CounterTier::Danger => COUNTER_DANGER,
    }
}

/// Draw `len/max characters`, right-aligned, in the counter's tier color
pub fn draw_char_counter(frame: &mut Frame, area: Rect, counter: &CharCounter) {
    let paragraph = Paragraph::new(counter.text())
        .style(Style::default().fg(counter_color(counter.tier())))
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

/// Draw a checkbox row
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {mark} {label}"), style))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_colors_are_distinct() {
        let colors = [
            counter_color(CounterTier::Normal),
            counter_color(CounterTier::Warning),
            counter_color(CounterTier::Danger),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(colors[1], Color::Rgb(245, 158, 11));
    }
}
