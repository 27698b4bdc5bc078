//! Submission boundary
//!
//! The form hands a `SubmissionPayload` to a `ContactSubmitter`; today that
//! is `SimulatedSubmitter`, which stands in for a real endpoint.

mod payload;
mod simulated;
mod traits;

pub use payload::{SubmissionPayload, SubmissionReceipt};
pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use traits::ContactSubmitter;

#[cfg(test)]
pub use traits::MockContactSubmitter;
