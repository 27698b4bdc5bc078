//! Contact form state and focus navigation

use super::field::{FieldName, FormField};

/// Options offered by the subject select
pub const SUBJECT_OPTIONS: &[&str] = &[
    "General Inquiry",
    "Technical Support",
    "Sales",
    "Feedback",
    "Other",
];

/// Trait for common form operations
pub trait Form {
    fn control_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn set_active_index(&mut self, index: usize);
    fn next_control(&mut self) {
        let count = self.control_count();
        let current = self.active_index();
        self.set_active_index((current + 1) % count);
    }
    fn prev_control(&mut self) {
        let count = self.control_count();
        let current = self.active_index();
        if current == 0 {
            self.set_active_index(count - 1);
        } else {
            self.set_active_index(current - 1);
        }
    }
}

/// A focusable control on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Field(FieldName),
    Newsletter,
    Submit,
}

impl Control {
    /// Every control, top to bottom
    pub const ALL: [Control; 8] = [
        Control::Field(FieldName::FirstName),
        Control::Field(FieldName::LastName),
        Control::Field(FieldName::Email),
        Control::Field(FieldName::Phone),
        Control::Field(FieldName::Subject),
        Control::Field(FieldName::Message),
        Control::Newsletter,
        Control::Submit,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Field(name) => name.index(),
            Self::Newsletter => 6,
            Self::Submit => 7,
        }
    }
}

/// The contact form: registered fields plus the newsletter opt-in
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Fields indexed by `FieldName::index`
    fields: Vec<FormField>,
    pub newsletter: bool,
    pub active_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| match name {
                FieldName::Subject => FormField::choice(name, SUBJECT_OPTIONS),
                FieldName::Message => FormField::text(name, true),
                _ => FormField::text(name, false),
            })
            .collect();

        Self {
            fields,
            newsletter: false,
            active_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// The control that currently has focus
    pub fn active(&self) -> Control {
        Control::ALL[self.active_index.min(Control::ALL.len() - 1)]
    }

    /// The focused field, if focus is on a field
    pub fn active_field_name(&self) -> Option<FieldName> {
        match self.active() {
            Control::Field(name) => Some(name),
            _ => None,
        }
    }

    pub fn focus(&mut self, control: Control) {
        self.active_index = control.index();
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name()
            .is_some_and(|name| self.field(name).is_multiline)
    }

    /// First field, in declaration order, currently showing an error
    pub fn first_error(&self) -> Option<FieldName> {
        self.fields
            .iter()
            .find(|field| field.has_error())
            .map(|field| field.name)
    }

    /// Empty every value and drop all error state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
            field.error = None;
        }
        self.newsletter = false;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn control_count(&self) -> usize {
        Control::ALL.len()
    }
    fn active_index(&self) -> usize {
        self.active_index
    }
    fn set_active_index(&mut self, index: usize) {
        self.active_index = index.min(Control::ALL.len() - 1);
    }
}
