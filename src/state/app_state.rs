//! Application state definitions

use super::forms::{layout, ContactForm, Control, FieldName, Form};
use super::scroll_state::ScrollState;
use crate::input::{format_phone, CharCounter};
use crate::validation::{feedback, validate_field, RuleSet, MESSAGE_MAX_LENGTH};
use std::time::{Duration, Instant};

/// Where the form is in the submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Failed,
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Invalid => "invalid",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// The success notification and when it hides itself
#[derive(Debug, Clone, Copy)]
pub struct SuccessBanner {
    pub shown_at: Instant,
    pub duration: Duration,
}

impl SuccessBanner {
    pub fn new(shown_at: Instant, duration: Duration) -> Self {
        Self { shown_at, duration }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Form context: built once at startup and passed to every component
#[derive(Debug)]
pub struct AppState {
    pub form: ContactForm,
    pub rules: RuleSet,
    pub counter: CharCounter,
    pub phase: SubmissionPhase,
    /// Submit control shows "Sending..." and ignores presses
    pub submit_loading: bool,
    pub success: Option<SuccessBanner>,
    pub scroll: ScrollState,
    /// Rows available to the form content at the last draw
    pub viewport_height: u16,
    /// Queue of modal error messages (oldest first)
    pub error_queue: Vec<String>,
}

impl AppState {
    pub fn new(rules: RuleSet) -> Self {
        let max_length = rules
            .max_length(FieldName::Message)
            .unwrap_or(MESSAGE_MAX_LENGTH);
        let form = ContactForm::new();
        let mut counter = CharCounter::new(max_length);
        counter.update(form.field(FieldName::Message).as_text());

        Self {
            form,
            rules,
            counter,
            phase: SubmissionPhase::Idle,
            submit_loading: false,
            success: None,
            scroll: ScrollState::default(),
            viewport_height: layout::content_height(),
            error_queue: Vec::new(),
        }
    }

    pub fn set_phase(&mut self, phase: SubmissionPhase) {
        tracing::debug!(from = self.phase.label(), to = phase.label(), "Submission phase");
        self.phase = phase;
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    pub fn show_success(&mut self, now: Instant, duration: Duration) {
        self.success = Some(SuccessBanner::new(now, duration));
    }

    pub fn hide_success(&mut self) {
        self.success = None;
    }

    pub fn is_success_visible(&self) -> bool {
        self.success.is_some()
    }

    /// Advance time-based state: scroll animation and banner auto-hide
    pub fn tick(&mut self, now: Instant) {
        self.scroll.update(now);
        if self.success.is_some_and(|banner| banner.is_expired(now)) {
            self.success = None;
        }
    }

    /// Recount the message field
    pub fn refresh_counter(&mut self) {
        self.counter
            .update(self.form.field(FieldName::Message).as_text());
    }

    /// Input event: optimistic error clearing plus per-field live formatting
    fn after_input(&mut self, name: FieldName) {
        let field = self.form.field_mut(name);
        feedback::on_input(field);

        match name {
            FieldName::Phone => {
                let formatted = format_phone(field.as_text());
                field.set_text(formatted);
            }
            FieldName::Message => self.refresh_counter(),
            _ => {}
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(name) = self.form.active_field_name() {
            let field = self.form.field_mut(name);
            if field.is_choice() {
                return;
            }
            field.push_char(c);
            self.after_input(name);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(name) = self.form.active_field_name() {
            self.form.field_mut(name).pop_char();
            self.after_input(name);
        }
    }

    /// Enter inside the multiline message field
    pub fn form_newline(&mut self) {
        if self.form.is_active_field_multiline() {
            self.form_input_char('\n');
        }
    }

    /// Cycle the focused select field
    pub fn form_cycle_choice(&mut self, forward: bool) {
        if let Some(name) = self.form.active_field_name() {
            let field = self.form.field_mut(name);
            if !field.is_choice() {
                return;
            }
            if forward {
                field.select_next();
            } else {
                field.select_prev();
            }
            self.after_input(name);
        }
    }

    pub fn toggle_newsletter(&mut self) {
        self.form.newsletter = !self.form.newsletter;
    }

    /// Blur: a field losing focus is validated
    fn blur_active(&mut self) {
        if let Some(name) = self.form.active_field_name() {
            validate_field(&self.rules, &mut self.form, name);
        }
    }

    pub fn next_control(&mut self) {
        self.blur_active();
        self.form.next_control();
        self.reveal_active();
    }

    pub fn prev_control(&mut self) {
        self.blur_active();
        self.form.prev_control();
        self.reveal_active();
    }

    /// Keep the focused control on screen
    fn reveal_active(&mut self) {
        let slot = layout::slot(self.form.active());
        self.scroll
            .ensure_visible(slot.top, slot.height, self.viewport_height);
    }

    /// Focus a field and smoothly bring it to the middle of the viewport
    pub fn focus_and_center(&mut self, name: FieldName, now: Instant) {
        let control = Control::Field(name);
        self.form.focus(control);
        let slot = layout::slot(control);
        self.scroll.center_on(
            slot.top,
            slot.height,
            self.viewport_height,
            layout::content_height(),
            now,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(RuleSet::contact().unwrap())
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.form_input_char(c);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = state();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error();
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut state = state();
            type_str(&mut state, "Ada");
            assert_eq!(state.form.field(FieldName::FirstName).as_text(), "Ada");
        }

        #[test]
        fn test_typing_clears_error_without_revalidating() {
            let mut state = state();
            state.next_control(); // blur on empty first name
            assert!(state.form.field(FieldName::FirstName).has_error());

            state.form.focus(Control::Field(FieldName::FirstName));
            state.form_input_char('1');
            // "1" is still invalid, but the error is cleared optimistically
            assert!(!state.form.field(FieldName::FirstName).has_error());
        }

        #[test]
        fn test_phone_is_formatted_live() {
            let mut state = state();
            state.form.focus(Control::Field(FieldName::Phone));
            type_str(&mut state, "5551234567");
            assert_eq!(state.form.field(FieldName::Phone).as_text(), "(555) 123-4567");
            type_str(&mut state, "99");
            assert_eq!(state.form.field(FieldName::Phone).as_text(), "(555) 123-4567");
        }

        #[test]
        fn test_phone_backspace_reflows() {
            let mut state = state();
            state.form.focus(Control::Field(FieldName::Phone));
            type_str(&mut state, "1234");
            assert_eq!(state.form.field(FieldName::Phone).as_text(), "(123) 4");
            state.form_backspace();
            assert_eq!(state.form.field(FieldName::Phone).as_text(), "123");
        }

        #[test]
        fn test_counter_follows_message() {
            let mut state = state();
            assert_eq!(state.counter.text(), "0/1000 characters");
            state.form.focus(Control::Field(FieldName::Message));
            type_str(&mut state, "Hi");
            state.form_newline();
            assert_eq!(state.counter.length(), 3);
            state.form_backspace();
            assert_eq!(state.counter.text(), "2/1000 characters");
        }

        #[test]
        fn test_newline_ignored_in_single_line_fields() {
            let mut state = state();
            state.form_newline();
            assert_eq!(state.form.field(FieldName::FirstName).as_text(), "");
        }

        #[test]
        fn test_subject_cycles_and_ignores_typing() {
            let mut state = state();
            state.form.focus(Control::Field(FieldName::Subject));
            state.form_input_char('x');
            assert_eq!(state.form.field(FieldName::Subject).as_text(), "");
            state.form_cycle_choice(true);
            assert_eq!(state.form.field(FieldName::Subject).as_text(), "General Inquiry");
            state.form_cycle_choice(false);
            assert_eq!(state.form.field(FieldName::Subject).as_text(), "Other");
        }

        #[test]
        fn test_cycle_choice_ignored_on_text_field() {
            let mut state = state();
            type_str(&mut state, "Ada");
            state.form_cycle_choice(true);
            assert_eq!(state.form.field(FieldName::FirstName).as_text(), "Ada");
        }

        #[test]
        fn test_toggle_newsletter() {
            let mut state = state();
            state.toggle_newsletter();
            assert!(state.form.newsletter);
            state.toggle_newsletter();
            assert!(!state.form.newsletter);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_blur_validates_left_field_only() {
            let mut state = state();
            state.next_control();
            assert!(state.form.field(FieldName::FirstName).has_error());
            assert!(!state.form.field(FieldName::LastName).has_error());
            assert_eq!(state.form.active(), Control::Field(FieldName::LastName));
        }

        #[test]
        fn test_blur_valid_field_shows_nothing() {
            let mut state = state();
            type_str(&mut state, "Ada");
            state.next_control();
            assert!(!state.form.field(FieldName::FirstName).has_error());
        }

        #[test]
        fn test_leaving_optional_empty_phone_is_fine() {
            let mut state = state();
            state.form.focus(Control::Field(FieldName::Phone));
            state.prev_control();
            assert!(!state.form.field(FieldName::Phone).has_error());
        }

        #[test]
        fn test_leaving_newsletter_validates_nothing() {
            let mut state = state();
            state.form.focus(Control::Newsletter);
            state.next_control();
            assert!(state.form.fields().all(|f| !f.has_error()));
            assert_eq!(state.form.active(), Control::Submit);
        }

        #[test]
        fn test_focus_keeps_control_visible() {
            let mut state = state();
            state.viewport_height = 10;
            state.form.focus(Control::Newsletter);
            state.next_control();
            let slot = layout::slot(Control::Submit);
            assert!(state.scroll.rows() + state.viewport_height >= slot.bottom());
        }

        #[test]
        fn test_focus_and_center() {
            let now = Instant::now();
            let mut state = state();
            state.viewport_height = 10;
            state.focus_and_center(FieldName::Message, now);
            assert_eq!(state.form.active(), Control::Field(FieldName::Message));
            state.tick(now + Duration::from_secs(1));
            let slot = layout::slot(Control::Field(FieldName::Message));
            assert!(state.scroll.rows() <= slot.top);
            assert!(state.scroll.rows() + state.viewport_height >= slot.top);
        }
    }

    mod success_banner {
        use super::*;

        #[test]
        fn test_banner_hides_after_duration() {
            let now = Instant::now();
            let mut state = state();
            state.show_success(now, Duration::from_secs(5));
            state.tick(now + Duration::from_secs(4));
            assert!(state.is_success_visible());
            state.tick(now + Duration::from_secs(5));
            assert!(!state.is_success_visible());
        }

        #[test]
        fn test_hide_success() {
            let mut state = state();
            state.show_success(Instant::now(), Duration::from_secs(5));
            state.hide_success();
            assert!(!state.is_success_visible());
        }
    }
}
