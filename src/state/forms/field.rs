//! Form field value objects and the field registry

/// Logical names of the contact form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldName {
    /// Every registered field, in the order validation visits them
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Identifier used in payloads and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name *",
            Self::LastName => "Last Name *",
            Self::Email => "Email Address *",
            Self::Phone => "Phone Number",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    /// Position in the registry
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Phone => 3,
            Self::Subject => 4,
            Self::Message => 5,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Select control: fixed options plus the chosen index, if any
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its value and inline error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Message currently shown under the field
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName, is_multiline: bool) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            error: None,
        }
    }

    /// Create a new select field with nothing chosen
    pub fn choice(name: FieldName, options: &'static [&'static str]) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
            error: None,
        }
    }

    /// Current raw value (the chosen option for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|idx| options.get(idx).copied())
                .unwrap_or(""),
        }
    }

    /// Value with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        self.as_text().trim()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Set the text value (no-op for select fields)
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Advance a select field to the next option, wrapping around
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(idx) => (idx + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a select field to the previous option, wrapping around
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(idx) => idx - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["Sales", "Support"];

    #[test]
    fn test_index_matches_declaration_order() {
        for (idx, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), idx);
        }
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text(FieldName::FirstName, false);
        field.push_char('A');
        field.push_char('d');
        field.push_char('a');
        assert_eq!(field.as_text(), "Ada");
        field.pop_char();
        assert_eq!(field.as_text(), "Ad");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_trimmed_strips_outer_whitespace() {
        let mut field = FormField::text(FieldName::Email, false);
        field.set_text("  a@b.co \t".to_string());
        assert_eq!(field.trimmed(), "a@b.co");
    }

    #[test]
    fn test_choice_starts_unselected() {
        let field = FormField::choice(FieldName::Subject, OPTIONS);
        assert_eq!(field.as_text(), "");
        assert!(field.is_choice());
    }

    #[test]
    fn test_choice_cycles_forward_and_back() {
        let mut field = FormField::choice(FieldName::Subject, OPTIONS);
        field.select_next();
        assert_eq!(field.as_text(), "Sales");
        field.select_next();
        assert_eq!(field.as_text(), "Support");
        field.select_next();
        assert_eq!(field.as_text(), "Sales");
        field.select_prev();
        assert_eq!(field.as_text(), "Support");
    }

    #[test]
    fn test_choice_ignores_typed_characters() {
        let mut field = FormField::choice(FieldName::Subject, OPTIONS);
        field.push_char('x');
        field.set_text("Sales".to_string());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_backspace_deselects_choice() {
        let mut field = FormField::choice(FieldName::Subject, OPTIONS);
        field.select_next();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
