//! Declarative per-field validation rules

use crate::state::FieldName;
use regex::Regex;
use thiserror::Error;

/// The kinds of check a rule can enforce, in evaluation priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
}

/// Errors raised while building a rule set
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// A length bound together with the message shown when it is violated
#[derive(Debug, Clone)]
pub struct LengthCheck {
    pub limit: usize,
    pub message: String,
}

/// A pattern together with the message shown when it does not match
#[derive(Debug, Clone)]
pub struct PatternCheck {
    pub regex: Regex,
    pub message: String,
}

/// Constraint set for one field.
///
/// Every check is declared together with its message, so a rule can never
/// enforce a check it has no message for.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    required: Option<String>,
    min_length: Option<LengthCheck>,
    max_length: Option<LengthCheck>,
    pattern: Option<PatternCheck>,
}

impl Rule {
    /// A rule for a field that may be left empty
    pub fn optional() -> Self {
        Self::default()
    }

    /// A rule for a field that must be filled in
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            required: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn min_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(LengthCheck {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn max_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(LengthCheck {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        self.pattern = Some(PatternCheck {
            regex: Regex::new(pattern)?,
            message: message.into(),
        });
        Ok(self)
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    pub fn required_message(&self) -> Option<&str> {
        self.required.as_deref()
    }

    pub fn min_check(&self) -> Option<&LengthCheck> {
        self.min_length.as_ref()
    }

    pub fn max_check(&self) -> Option<&LengthCheck> {
        self.max_length.as_ref()
    }

    pub fn pattern_check(&self) -> Option<&PatternCheck> {
        self.pattern.as_ref()
    }
}

/// Rules keyed by field, kept in declaration order
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(FieldName, Rule)>,
}

/// Letters, spaces, apostrophes and hyphens
const NAME_PATTERN: &str = r"^[a-zA-Z\s'-]+$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[\d\s\-\+\(\)]+$";

/// Upper bound on the message length
pub const MESSAGE_MAX_LENGTH: usize = 1000;

impl RuleSet {
    pub fn new(rules: Vec<(FieldName, Rule)>) -> Self {
        Self { rules }
    }

    /// The contact form's rules
    pub fn contact() -> Result<Self, RuleSetError> {
        let invalid = |name: FieldName| {
            move |source: regex::Error| RuleSetError::InvalidPattern {
                field: name.as_str(),
                source,
            }
        };

        Ok(Self::new(vec![
            (
                FieldName::FirstName,
                Rule::required("First name is required")
                    .min_length(2, "First name must be at least 2 characters")
                    .pattern(NAME_PATTERN, "Please enter a valid first name")
                    .map_err(invalid(FieldName::FirstName))?,
            ),
            (
                FieldName::LastName,
                Rule::required("Last name is required")
                    .min_length(2, "Last name must be at least 2 characters")
                    .pattern(NAME_PATTERN, "Please enter a valid last name")
                    .map_err(invalid(FieldName::LastName))?,
            ),
            (
                FieldName::Email,
                Rule::required("Email address is required")
                    .pattern(EMAIL_PATTERN, "Please enter a valid email address")
                    .map_err(invalid(FieldName::Email))?,
            ),
            (
                FieldName::Phone,
                Rule::optional()
                    .pattern(PHONE_PATTERN, "Please enter a valid phone number")
                    .map_err(invalid(FieldName::Phone))?,
            ),
            (FieldName::Subject, Rule::required("Please select a subject")),
            (
                FieldName::Message,
                Rule::required("Message is required")
                    .min_length(10, "Message must be at least 10 characters")
                    .max_length(
                        MESSAGE_MAX_LENGTH,
                        "Message must not exceed 1000 characters",
                    ),
            ),
        ]))
    }

    pub fn get(&self, name: FieldName) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, rule)| rule)
    }

    /// Registered field names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Declared maximum length for a field, if any
    pub fn max_length(&self, name: FieldName) -> Option<usize> {
        self.get(name).and_then(|rule| rule.max_check()).map(|c| c.limit)
    }
}
