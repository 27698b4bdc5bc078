//! Field and form validation against the rule set

use super::feedback::{clear_error, show_error};
use super::rules::{Rule, RuleKind, RuleSet};
use crate::state::{ContactForm, FieldName};
use thiserror::Error;

/// The single failure reported for a field in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    MissingRequiredValue(String),
    #[error("{0}")]
    TooShort(String),
    #[error("{0}")]
    TooLong(String),
    #[error("{0}")]
    PatternMismatch(String),
}

impl FieldError {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::MissingRequiredValue(_) => RuleKind::Required,
            Self::TooShort(_) => RuleKind::MinLength,
            Self::TooLong(_) => RuleKind::MaxLength,
            Self::PatternMismatch(_) => RuleKind::Pattern,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::MissingRequiredValue(m)
            | Self::TooShort(m)
            | Self::TooLong(m)
            | Self::PatternMismatch(m) => m,
        }
    }
}

pub type ValidationResult = Result<(), FieldError>;

/// Evaluate a value against a rule.
///
/// Checks run on the trimmed value in priority order (required, min length,
/// max length, pattern) and the first failure wins. An empty value on an
/// optional field is valid without running the remaining checks.
pub fn evaluate(rule: &Rule, value: &str) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return match rule.required_message() {
            Some(message) => Err(FieldError::MissingRequiredValue(message.to_string())),
            None => Ok(()),
        };
    }

    let length = value.chars().count();

    if let Some(check) = rule.min_check() {
        if length < check.limit {
            return Err(FieldError::TooShort(check.message.clone()));
        }
    }

    if let Some(check) = rule.max_check() {
        if length > check.limit {
            return Err(FieldError::TooLong(check.message.clone()));
        }
    }

    if let Some(check) = rule.pattern_check() {
        if !check.regex.is_match(value) {
            return Err(FieldError::PatternMismatch(check.message.clone()));
        }
    }

    Ok(())
}

/// Validate one field, refreshing its inline error. Returns whether it passed.
pub fn validate_field(rules: &RuleSet, form: &mut ContactForm, name: FieldName) -> bool {
    let field = form.field_mut(name);
    clear_error(field);

    let Some(rule) = rules.get(name) else {
        return true;
    };

    match evaluate(rule, field.as_text()) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(field = name.as_str(), kind = ?err.kind(), "Validation failed");
            show_error(field, err.message());
            false
        }
    }
}

/// Validate every registered field in declaration order.
///
/// Never stops at the first failure: every field's visible state is
/// refreshed on each call.
pub fn validate_form(rules: &RuleSet, form: &mut ContactForm) -> bool {
    rules
        .names()
        .fold(true, |all_valid, name| validate_field(rules, form, name) && all_valid)
}
