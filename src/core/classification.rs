//! Structural fingerprint of a classified artifact.

use serde::{Deserialize, Serialize};

use crate::core::file_type::FileType;
use crate::entropy::EntropyLevel;
use crate::error::Result;

/// Bytes per mebibyte; sizes in summaries and reports use this unit.
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Classification result for one artifact buffer.
///
/// Every field is a pure function of the input bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactClassification {
    pub file_type: FileType,
    pub mime_type: String,
    /// Length of the input in bytes
    pub size: u64,
    /// Lower-case hex SHA-256 of the full buffer
    pub hash: String,
    /// Shannon entropy of the full buffer, bits per byte
    pub entropy: f64,
    pub suspicious_indicators: Vec<String>,
    pub summary: String,
}

impl ArtifactClassification {
    pub fn entropy_level(&self) -> EntropyLevel {
        EntropyLevel::from_entropy(self.entropy)
    }

    pub fn size_mib(&self) -> f64 {
        self.size as f64 / BYTES_PER_MIB
    }

    pub fn has_indicators(&self) -> bool {
        !self.suspicious_indicators.is_empty()
    }

    /// Serialize to compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

/// One-line human summary embedding type, size, entropy bucket and indicator count.
pub fn summary_line(
    file_type: FileType,
    size: u64,
    entropy: f64,
    indicator_count: usize,
) -> String {
    format!(
        "{} artifact, {:.2} MB, {} entropy ({:.2}), {} suspicious indicator(s) detected",
        file_type,
        size as f64 / BYTES_PER_MIB,
        EntropyLevel::from_entropy(entropy),
        entropy,
        indicator_count
    )
}
