//! Security score and advisory recommendations for a classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::ArtifactClassification;
use crate::entropy::HIGH_ENTROPY_THRESHOLD;

/// Score of an artifact with nothing notable.
pub const MAX_SCORE: i32 = 10;
/// Deduction per suspicious indicator.
pub const INDICATOR_PENALTY: i32 = 2;
/// Files above this size get the sampling advisory.
pub const LARGE_FILE_BYTES: u64 = 100 * 1024 * 1024;

/// Fixed advisory emitted in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    DeeperAnalysis,
    CheckEncryption,
    VerifyFileType,
    ConsiderSampling,
    AppearsNormal,
}

impl Recommendation {
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::DeeperAnalysis => {
                "Suspicious indicators present: conduct deeper analysis of the flagged content."
            }
            Recommendation::CheckEncryption => {
                "High entropy detected: check for encryption, compression or packing."
            }
            Recommendation::VerifyFileType => {
                "Unknown file type: verify the file type with format-specific tooling."
            }
            Recommendation::ConsiderSampling => {
                "Large file (over 100 MB): consider sampling for analysis."
            }
            Recommendation::AppearsNormal => {
                "File appears normal: no immediate action required."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Start at 10, deduct per finding, clamp to [0, 10].
pub fn security_score(c: &ArtifactClassification) -> i32 {
    let indicators = i32::try_from(c.suspicious_indicators.len()).unwrap_or(i32::MAX / 2);
    let mut score = MAX_SCORE.saturating_sub(indicators.saturating_mul(INDICATOR_PENALTY));
    if c.entropy > HIGH_ENTROPY_THRESHOLD {
        score -= 1;
    }
    if c.file_type.is_unknown() {
        score -= 1;
    }
    score.clamp(0, MAX_SCORE)
}

/// Advisories in fixed check order: indicators, entropy, unknown type, size.
pub fn recommendations(c: &ArtifactClassification) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if c.has_indicators() {
        out.push(Recommendation::DeeperAnalysis);
    }
    if c.entropy > HIGH_ENTROPY_THRESHOLD {
        out.push(Recommendation::CheckEncryption);
    }
    if c.file_type.is_unknown() {
        out.push(Recommendation::VerifyFileType);
    }
    if c.size > LARGE_FILE_BYTES {
        out.push(Recommendation::ConsiderSampling);
    }
    if out.is_empty() {
        out.push(Recommendation::AppearsNormal);
    }
    out
}
