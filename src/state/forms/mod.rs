//! Form domain layer
//!
//! Field registry, the contact form itself and the row geometry used to
//! scroll between its controls.

mod field;
mod form_state;
pub mod layout;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Control, Form};
