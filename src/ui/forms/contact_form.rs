//! Contact form rendering

use super::field_renderer::{draw_char_counter, draw_checkbox, draw_field, draw_field_error};
use crate::app::App;
use crate::state::layout::{self, FIELD_BOX_HEIGHT, MESSAGE_BOX_HEIGHT, SUBMIT_HEIGHT};
use crate::state::{Control, FieldName};
use crate::ui::components::render_submit_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the success banner when shown
pub const BANNER_HEIGHT: u16 = 3;

const SUCCESS_TEXT: &str = "✓ Thank you! Your message has been sent successfully.";

/// Split the inside of the form block into banner and scrollable content
pub fn split_form(inner: Rect, banner_visible: bool) -> (Rect, Rect) {
    let banner_height = if banner_visible { BANNER_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_height), Constraint::Min(0)])
        .split(inner);
    (chunks[0], chunks[1])
}

/// Draw the contact form with its success banner
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (banner_area, content_area) = split_form(inner, app.state.is_success_visible());
    if app.state.is_success_visible() {
        draw_success_banner(frame, banner_area);
    }

    draw_controls(frame, content_area, app);
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(
        SUCCESS_TEXT,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(banner, area);
}

/// Screen area for rows `start..start + height` of a slot whose first
/// `skip` rows are scrolled off the top of `area`
fn clip_rows(area: Rect, skip: u16, start: u16, height: u16) -> Option<Rect> {
    let top = start.max(skip);
    let bottom = (start + height).min(skip + area.height);
    (top < bottom).then(|| Rect {
        x: area.x,
        y: area.y + (top - skip),
        width: area.width,
        height: bottom - top,
    })
}

/// Draw every control that is at least partly inside the scrolled viewport,
/// clipped to it
fn draw_controls(frame: &mut Frame, viewport: Rect, app: &App) {
    let offset = app.state.scroll.rows();
    let view_bottom = offset + viewport.height;
    let active = app.state.form.active();

    for control in Control::ALL {
        let slot = layout::slot(control);
        let top = slot.top.max(offset);
        let bottom = slot.bottom().min(view_bottom);
        if top >= bottom {
            continue;
        }
        let area = Rect {
            x: viewport.x,
            y: viewport.y + (top - offset),
            width: viewport.width,
            height: bottom - top,
        };
        let skip = top - slot.top;
        let is_active = control == active;

        match control {
            Control::Field(name) => draw_field_slot(frame, area, skip, app, name, is_active),
            Control::Newsletter => {
                if let Some(row) = clip_rows(area, skip, 0, 1) {
                    draw_checkbox(
                        frame,
                        row,
                        "Subscribe to our newsletter",
                        app.state.form.newsletter,
                        is_active,
                    );
                }
            }
            Control::Submit => {
                if let Some(button) = clip_rows(area, skip, 0, SUBMIT_HEIGHT) {
                    render_submit_button(frame, button, app.state.submit_loading, is_active);
                }
            }
        }
    }
}

/// A field box followed by its counter (message only) and error line
fn draw_field_slot(
    frame: &mut Frame,
    area: Rect,
    skip: u16,
    app: &App,
    name: FieldName,
    is_active: bool,
) {
    let field = app.state.form.field(name);
    let is_message = name == FieldName::Message;
    let box_height = if is_message {
        MESSAGE_BOX_HEIGHT
    } else {
        FIELD_BOX_HEIGHT
    };

    if let Some(field_box) = clip_rows(area, skip, 0, box_height) {
        draw_field(frame, field_box, field, is_active);
    }

    let mut row = box_height;
    if is_message {
        if let Some(counter) = clip_rows(area, skip, row, 1) {
            draw_char_counter(frame, counter, &app.state.counter);
        }
        row += 1;
    }
    if let Some(error) = clip_rows(area, skip, row, 1) {
        draw_field_error(frame, error, field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_rows_inside() {
        let area = Rect::new(0, 5, 10, 4);
        assert_eq!(clip_rows(area, 0, 1, 2), Some(Rect::new(0, 6, 10, 2)));
    }

    #[test]
    fn test_clip_rows_cuts_bottom() {
        let area = Rect::new(0, 5, 10, 4);
        assert_eq!(clip_rows(area, 0, 0, 8), Some(Rect::new(0, 5, 10, 4)));
        assert_eq!(clip_rows(area, 0, 4, 1), None);
    }

    #[test]
    fn test_clip_rows_cuts_scrolled_off_top() {
        // first 3 rows of the slot are above the viewport
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(clip_rows(area, 3, 0, 3), None);
        assert_eq!(clip_rows(area, 3, 0, 8), Some(Rect::new(0, 0, 10, 5)));
        assert_eq!(clip_rows(area, 3, 7, 1), Some(Rect::new(0, 4, 10, 1)));
        assert_eq!(clip_rows(area, 3, 8, 1), None);
    }
}
