//! Validation engine
//!
//! - `rules`: declarative per-field rules and the contact rule set
//! - `validator`: evaluation of fields and the whole form
//! - `feedback`: showing and clearing inline errors

pub mod feedback;
mod rules;
mod validator;

pub use rules::{RuleSet, MESSAGE_MAX_LENGTH};
pub use validator::{validate_field, validate_form};
