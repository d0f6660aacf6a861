//! Time tracking entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One tracked block of work. An entry without `ended_at` is still running;
/// the normalizer measures it against the current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Coarse activity label ("development", "support", ...); used for the
    /// event title when no description was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub started_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<NaiveDateTime>,
    /// Stored duration wins over the timestamp difference when both exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}
