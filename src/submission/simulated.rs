//! Stand-in submitter that always succeeds after a fixed delay

use super::payload::{SubmissionPayload, SubmissionReceipt};
use super::traits::ContactSubmitter;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Replacement point for a real network call
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt> {
        tracing::debug!(email = %payload.email, delay_ms = self.delay.as_millis() as u64, "Simulating submission");
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::from_form(&crate::state::ContactForm::new(), Utc::now())
    }

    #[test]
    fn test_always_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let result = tokio_test::block_on(submitter.submit(payload()));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_waits_for_configured_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(30));
        let started = tokio::time::Instant::now();
        submitter.submit(payload()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSubmitter::default().delay, DEFAULT_SUBMIT_DELAY);
    }
}
