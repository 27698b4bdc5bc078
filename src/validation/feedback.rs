//! Inline error feedback on form fields

use crate::state::FormField;

/// Mark the field erroneous and display the message under it
pub fn show_error(field: &mut FormField, message: &str) {
    field.error = Some(message.to_string());
}

/// Unmark the field and hide its message
pub fn clear_error(field: &mut FormField) {
    field.error = None;
}

/// Optimistic clearing on edit: typing into a field that shows an error
/// hides the error without re-validating. Returns whether anything changed.
pub fn on_input(field: &mut FormField) -> bool {
    if field.has_error() {
        clear_error(field);
        true
    } else {
        false
    }
}
