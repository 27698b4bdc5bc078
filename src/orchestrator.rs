//! Submission flow
//!
//! `Idle → Validating → (Invalid → Idle) | (Submitting → Success → Idle)`,
//! plus `Submitting → Failed → Idle` when the submitter reports an error.
//! The asynchronous call itself is owned by the caller: `begin_submission`
//! hands back the payload to send and `complete_submission` applies the
//! outcome once the task has been awaited.

use crate::state::{AppState, FieldName, SubmissionPhase};
use crate::submission::{SubmissionPayload, SubmissionReceipt};
use crate::validation::validate_form;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight
    Busy,
    /// Validation failed; focus moved to this field
    Invalid { first_error: Option<FieldName> },
    /// Validation passed; the payload should now be sent
    Started(SubmissionPayload),
}

/// Handle a submit trigger
pub fn begin_submission(state: &mut AppState, timestamp: DateTime<Utc>, now: Instant) -> SubmitAttempt {
    if state.submit_loading || state.phase == SubmissionPhase::Submitting {
        return SubmitAttempt::Busy;
    }

    state.hide_success();
    state.set_phase(SubmissionPhase::Validating);

    if !validate_form(&state.rules, &mut state.form) {
        state.set_phase(SubmissionPhase::Invalid);
        let first_error = state.form.first_error();
        if let Some(name) = first_error {
            state.focus_and_center(name, now);
        }
        state.set_phase(SubmissionPhase::Idle);
        return SubmitAttempt::Invalid { first_error };
    }

    let payload = SubmissionPayload::from_form(&state.form, timestamp);
    state.submit_loading = true;
    state.set_phase(SubmissionPhase::Submitting);
    SubmitAttempt::Started(payload)
}

/// Apply the outcome of the submission task
pub fn complete_submission(
    state: &mut AppState,
    payload: &SubmissionPayload,
    outcome: Result<SubmissionReceipt>,
    success_duration: Duration,
    now: Instant,
) {
    state.submit_loading = false;

    match outcome {
        Ok(receipt) => {
            let body = payload.to_json().unwrap_or_else(|e| format!("<unserializable: {e}>"));
            tracing::info!(receipt = %receipt.id, payload = %body, "Form submitted");

            state.set_phase(SubmissionPhase::Success);
            state.show_success(now, success_duration);
            state.form.reset();
            state.refresh_counter();
            state.scroll.scroll_to(0, now);
        }
        Err(err) => {
            tracing::warn!(error = %err, "Form submission failed");
            state.set_phase(SubmissionPhase::Failed);
            state.push_error(format!("Failed to send message: {err}"));
        }
    }

    state.set_phase(SubmissionPhase::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Control, FieldName};
    use crate::submission::{ContactSubmitter, MockContactSubmitter};
    use crate::validation::RuleSet;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    const BANNER: Duration = Duration::from_secs(5);

    fn state() -> AppState {
        AppState::new(RuleSet::contact().unwrap())
    }

    fn filled_state() -> AppState {
        let mut state = state();
        let form = &mut state.form;
        form.field_mut(FieldName::FirstName)
            .set_text("Ada".to_string());
        form.field_mut(FieldName::LastName)
            .set_text("Lovelace".to_string());
        form.field_mut(FieldName::Email)
            .set_text("ada@example.com".to_string());
        form.field_mut(FieldName::Phone)
            .set_text("(555) 123-4567".to_string());
        form.field_mut(FieldName::Subject).select_next();
        form.field_mut(FieldName::Message)
            .set_text("I would like to know more.".to_string());
        form.newsletter = true;
        state.refresh_counter();
        state
    }

    fn started(attempt: SubmitAttempt) -> SubmissionPayload {
        match attempt {
            SubmitAttempt::Started(payload) => payload,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    mod begin {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_is_not_submitted() {
            let mut state = state();
            state
                .form
                .field_mut(FieldName::Email)
                .set_text("ada@example.com".to_string());

            let attempt = begin_submission(&mut state, Utc::now(), Instant::now());

            assert_eq!(
                attempt,
                SubmitAttempt::Invalid {
                    first_error: Some(FieldName::FirstName)
                }
            );
            assert!(!state.submit_loading);
            assert_eq!(state.phase, SubmissionPhase::Idle);
            assert_eq!(state.form.field(FieldName::Email).as_text(), "ada@example.com");
            assert!(!state.is_success_visible());
        }

        #[test]
        fn test_invalid_form_focuses_first_error() {
            let mut state = filled_state();
            state.form.focus(Control::Submit);
            state
                .form
                .field_mut(FieldName::Message)
                .set_text("short".to_string());

            begin_submission(&mut state, Utc::now(), Instant::now());

            assert_eq!(state.form.active(), Control::Field(FieldName::Message));
        }

        #[test]
        fn test_valid_form_enters_submitting() {
            let mut state = filled_state();
            let payload = started(begin_submission(&mut state, Utc::now(), Instant::now()));

            assert!(state.submit_loading);
            assert_eq!(state.phase, SubmissionPhase::Submitting);
            assert_eq!(payload.first_name, "Ada");
            assert_eq!(payload.subject, "General Inquiry");
            assert!(payload.newsletter);
        }

        #[test]
        fn test_submit_while_in_flight_is_ignored() {
            let mut state = filled_state();
            started(begin_submission(&mut state, Utc::now(), Instant::now()));
            assert_eq!(
                begin_submission(&mut state, Utc::now(), Instant::now()),
                SubmitAttempt::Busy
            );
        }

        #[test]
        fn test_submit_hides_previous_success() {
            let mut state = state();
            state.show_success(Instant::now(), BANNER);
            begin_submission(&mut state, Utc::now(), Instant::now());
            assert!(!state.is_success_visible());
        }
    }

    mod complete {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_resets_form_and_shows_banner() {
            let now = Instant::now();
            let mut state = filled_state();
            let payload = started(begin_submission(&mut state, Utc::now(), now));

            complete_submission(&mut state, &payload, Ok(SubmissionReceipt::new()), BANNER, now);

            assert!(state.is_success_visible());
            assert!(!state.submit_loading);
            assert_eq!(state.phase, SubmissionPhase::Idle);
            assert!(state.form.fields().all(|f| f.as_text().is_empty()));
            assert!(!state.form.newsletter);
            assert_eq!(state.counter.length(), 0);
            assert!(!state.has_errors());
        }

        #[test]
        fn test_success_banner_auto_hides() {
            let now = Instant::now();
            let mut state = filled_state();
            let payload = started(begin_submission(&mut state, Utc::now(), now));
            complete_submission(&mut state, &payload, Ok(SubmissionReceipt::new()), BANNER, now);

            state.tick(now + BANNER);
            assert!(!state.is_success_visible());
        }

        #[test]
        fn test_failure_keeps_values_and_reports() {
            let now = Instant::now();
            let mut state = filled_state();
            let payload = started(begin_submission(&mut state, Utc::now(), now));

            complete_submission(&mut state, &payload, Err(anyhow!("connection reset")), BANNER, now);

            assert!(!state.submit_loading);
            assert!(!state.is_success_visible());
            assert_eq!(state.phase, SubmissionPhase::Idle);
            assert_eq!(state.form.field(FieldName::FirstName).as_text(), "Ada");
            assert!(state.form.newsletter);
            assert_eq!(
                state.current_error(),
                Some("Failed to send message: connection reset")
            );
        }
    }

    #[tokio::test]
    async fn test_full_flow_with_mock_submitter() {
        let mut submitter = MockContactSubmitter::new();
        submitter
            .expect_submit()
            .withf(|payload| payload.email == "ada@example.com" && payload.newsletter)
            .times(1)
            .returning(|_| Ok(SubmissionReceipt::new()));

        let now = Instant::now();
        let mut state = filled_state();
        let payload = started(begin_submission(&mut state, Utc::now(), now));
        let outcome = submitter.submit(payload.clone()).await;
        complete_submission(&mut state, &payload, outcome, BANNER, now);

        assert!(state.is_success_visible());
        assert_eq!(state.form.field(FieldName::Email).as_text(), "");
    }
}
