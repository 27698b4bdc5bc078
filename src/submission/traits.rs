//! Trait abstraction for the submission boundary to enable mocking in tests

use super::payload::{SubmissionPayload, SubmissionReceipt};
use anyhow::Result;
use async_trait::async_trait;

/// Where a validated contact request is sent.
///
/// Implementations resolve exactly once per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Deliver the payload
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt>;
}
