//! Shared wire-schema DTOs for the backend job API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. The backend is loose
//! about numeric vs. string identifiers (submit acceptances carry integer
//! ids, status lookups echo them back as strings), so id handling goes
//! through lax extraction helpers instead of strict struct fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a conversion job as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// Job accepted but not yet picked up. The backend also reports
    /// `"ready"` for the null job, which maps here.
    #[default]
    #[serde(alias = "ready")]
    Pending,
    /// Job is being worked on.
    Processing,
    /// Successful terminal state.
    Completed,
    /// Error terminal state. Older backend builds report `"error"`.
    #[serde(alias = "error")]
    Failed,
}

impl JobState {
    /// Whether polling stops at this state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// One job-status snapshot from `GET /api/status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    /// Opaque job handle issued by the backend.
    #[serde(default, deserialize_with = "deserialize_lax_id")]
    pub id: String,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: JobState,
    /// Percent complete. The backend sends `-1` (or `null`) while progress
    /// is indeterminate; consumers filter through
    /// [`crate::state::status::display_progress`].
    #[serde(default)]
    pub progress: Option<i32>,
    /// Human-readable progress message.
    #[serde(default)]
    pub message: String,
    /// Failure detail, populated when `status` is failed.
    #[serde(default)]
    pub exception: Option<String>,
}

/// Parsed reply to a conversion form POST.
///
/// Built leniently from a `serde_json::Value` so a malformed body degrades
/// to an empty reply instead of failing the whole submission flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReply {
    /// Job handle for status polling, when the submission was accepted.
    pub id: Option<String>,
    /// Backend-supplied message (progress note or error text).
    pub message: String,
    /// Failure detail, when the backend rejected the submission.
    pub exception: Option<String>,
}

impl SubmitReply {
    /// Extract the reply fields from an arbitrary JSON body.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            id: extract_job_id(value),
            message: value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned(),
            exception: value
                .get("exception")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// Pull the job identifier out of a submit reply body.
///
/// The backend has used both `status_id` and `id` keys, and both string
/// and integer encodings; all four combinations are accepted. Empty
/// strings count as absent.
#[must_use]
pub fn extract_job_id(value: &serde_json::Value) -> Option<String> {
    for key in ["status_id", "id"] {
        let Some(raw) = value.get(key) else {
            continue;
        };
        if let Some(text) = raw.as_str() {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        } else if let Some(number) = raw.as_i64() {
            return Some(number.to_string());
        }
    }
    None
}

fn deserialize_lax_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}
