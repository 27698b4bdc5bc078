//! Submission payload and receipt

use crate::state::{ContactForm, FieldName};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Snapshot of the form at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl SubmissionPayload {
    /// Collect trimmed field values; the subject is taken as selected
    pub fn from_form(form: &ContactForm, timestamp: DateTime<Utc>) -> Self {
        let value = |name: FieldName| form.field(name).trimmed().to_string();
        Self {
            first_name: value(FieldName::FirstName),
            last_name: value(FieldName::LastName),
            email: value(FieldName::Email),
            phone: value(FieldName::Phone),
            subject: form.field(FieldName::Subject).as_text().to_string(),
            message: value(FieldName::Message),
            newsletter: form.newsletter,
            timestamp,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// `2024-05-01T12:00:00.000Z`
fn serialize_iso8601<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Acknowledgement from the submission boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}
