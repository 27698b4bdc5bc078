//! Row geometry of the scrollable form content

use super::form_state::Control;
use super::field::FieldName;

/// Height of a single-line field box (border + text + border)
pub const FIELD_BOX_HEIGHT: u16 = 3;
/// Height of the message box
pub const MESSAGE_BOX_HEIGHT: u16 = 8;
/// Height of the submit button
pub const SUBMIT_HEIGHT: u16 = 3;

/// Vertical placement of one control inside the form content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSlot {
    pub top: u16,
    pub height: u16,
}

impl ControlSlot {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Rows taken by a control, including the line reserved under each field
/// for its error message (and the counter, for the message field)
pub fn control_height(control: Control) -> u16 {
    match control {
        Control::Field(FieldName::Message) => MESSAGE_BOX_HEIGHT + 2,
        Control::Field(_) => FIELD_BOX_HEIGHT + 1,
        Control::Newsletter => 2,
        Control::Submit => SUBMIT_HEIGHT,
    }
}

pub fn slot(control: Control) -> ControlSlot {
    let top = Control::ALL
        .iter()
        .take_while(|c| **c != control)
        .map(|c| control_height(*c))
        .sum();
    ControlSlot {
        top,
        height: control_height(control),
    }
}

/// Total rows of the form content
pub fn content_height() -> u16 {
    Control::ALL.iter().map(|c| control_height(*c)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_starts_at_zero() {
        assert_eq!(slot(Control::Field(FieldName::FirstName)).top, 0);
    }

    #[test]
    fn test_slots_are_contiguous() {
        for pair in Control::ALL.windows(2) {
            assert_eq!(slot(pair[0]).bottom(), slot(pair[1]).top);
        }
    }

    #[test]
    fn test_content_height_ends_at_submit_bottom() {
        assert_eq!(slot(Control::Submit).bottom(), content_height());
    }
}
