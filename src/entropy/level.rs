//! Entropy bucket labels used in summaries and reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entropy above this value is reported as high.
pub const HIGH_ENTROPY_THRESHOLD: f64 = 7.5;
/// Entropy below this value is reported as low.
pub const LOW_ENTROPY_THRESHOLD: f64 = 5.0;

/// Coarse entropy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyLevel {
    /// Below 5 bits per byte
    Low,
    /// 5 to 7.5 inclusive
    Medium,
    /// Above 7.5; typical of compressed or encrypted content
    High,
}

impl EntropyLevel {
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy < LOW_ENTROPY_THRESHOLD {
            EntropyLevel::Low
        } else if entropy > HIGH_ENTROPY_THRESHOLD {
            EntropyLevel::High
        } else {
            EntropyLevel::Medium
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntropyLevel::Low => "low",
            EntropyLevel::Medium => "medium",
            EntropyLevel::High => "high",
        }
    }
}

impl fmt::Display for EntropyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
