//! Persisted staging record for summarised model output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw model output together with its summary, written once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedArtifactRecord {
    /// Originating model or source name
    pub model: String,
    /// Creation time, serialized as RFC 3339 / ISO-8601
    pub timestamp: DateTime<Utc>,
    /// Full, untruncated text that was summarised
    pub raw_content: String,
    pub summary: String,
}

impl StagedArtifactRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        model: impl Into<String>,
        raw_content: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            timestamp: Utc::now(),
            raw_content: raw_content.into(),
            summary: summary.into(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
