//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content_area = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, content_area, app);

    layout::draw_status_bar(frame, app);

    // Draw error dialog on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

/// Rows the form can show below its banner for a terminal of this size
pub fn form_viewport_height(area: Rect, banner_visible: bool) -> u16 {
    layout::form_viewport_height(area, banner_visible)
}
