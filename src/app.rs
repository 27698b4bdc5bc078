//! Application state and core logic

use crate::config::ContactConfig;
use crate::orchestrator::{begin_submission, complete_submission, SubmitAttempt};
use crate::state::{AppState, Control};
use crate::submission::{ContactSubmitter, SimulatedSubmitter, SubmissionPayload, SubmissionReceipt};
use crate::validation::RuleSet;
use anyhow::{anyhow, Result};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Window for the second Ctrl+C of a double-tap quit
const DOUBLE_TAP_WINDOW: Duration = Duration::from_secs(1);

/// A submission task in flight and the payload it carries
struct PendingSubmission {
    payload: SubmissionPayload,
    handle: JoinHandle<Result<SubmissionReceipt>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated payloads are sent
    submitter: Arc<dyn ContactSubmitter>,
    pending: Option<PendingSubmission>,
    success_duration: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Self::with_submitter(config, submitter)
    }

    /// Create an App that sends through the given submitter
    pub fn with_submitter(config: &ContactConfig, submitter: Arc<dyn ContactSubmitter>) -> Result<Self> {
        let rules = RuleSet::contact()?;
        tracing::info!("Contact form initialized");

        Ok(Self {
            state: AppState::new(rules),
            submitter,
            pending: None,
            success_duration: config.success_display(),
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Double-tap Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|prev| now.duration_since(prev) < DOUBLE_TAP_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        let active = self.state.form.active();
        let on_choice = self
            .state
            .form
            .active_field_name()
            .is_some_and(|name| self.state.form.field(name).is_choice());

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit()?,
            KeyCode::Tab | KeyCode::Down => self.state.next_control(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_control(),
            KeyCode::Left if on_choice => self.state.form_cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.state.form_cycle_choice(true),
            KeyCode::Char(' ') | KeyCode::Enter if active == Control::Newsletter => {
                self.state.toggle_newsletter()
            }
            KeyCode::Char(' ') | KeyCode::Enter if active == Control::Submit => self.submit()?,
            // Enter only adds a newline in the message field; it never submits
            KeyCode::Enter => self.state.form_newline(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit trigger: validate and, if valid, start the submission task
    pub fn submit(&mut self) -> Result<()> {
        match begin_submission(&mut self.state, Utc::now(), Instant::now()) {
            SubmitAttempt::Busy => {}
            SubmitAttempt::Invalid { first_error } => {
                tracing::debug!(first_error = ?first_error.map(|f| f.as_str()), "Submission blocked by validation");
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitAttempt::Started(payload) => {
                let submitter = Arc::clone(&self.submitter);
                let task_payload = payload.clone();
                let handle = tokio::spawn(async move { submitter.submit(task_payload).await });
                self.pending = Some(PendingSubmission { payload, handle });
            }
        }
        Ok(())
    }

    /// Apply the submission outcome if its task has finished
    pub async fn poll_submission(&mut self) {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished())
        {
            self.finish_pending_submission().await;
        }
    }

    /// Await the in-flight submission, if any, and apply its outcome
    pub async fn finish_pending_submission(&mut self) {
        let Some(PendingSubmission { payload, handle }) = self.pending.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(anyhow!("submission task failed: {join_err}")),
        };
        complete_submission(
            &mut self.state,
            &payload,
            outcome,
            self.success_duration,
            Instant::now(),
        );
    }

    /// Advance time-based UI state
    pub fn tick(&mut self) {
        self.state.tick(Instant::now());
    }

    /// Record how many rows the form content has on screen
    pub fn set_viewport_height(&mut self, rows: u16) {
        self.state.viewport_height = rows;
    }
}
