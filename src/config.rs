//! Configuration for the classification and summarisation engine.
//!
//! Every default equals the fixed constant the engine is specified with;
//! overrides are loaded from JSON with missing fields left at their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CaseLensError, Result};

/// Marker prepended to trimmed summaries.
pub const TRUNCATION_MARKER: &str = "...";

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Header sniffing and indicator scan windows.
    pub classifier: ClassifierConfig,
    /// Streaming summary bounds and fixed strings.
    pub summary: SummaryConfig,
    /// Destination of staged records.
    pub staging: StagingConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON document.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load overrides from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.classifier.sniff_window == 0 {
            return Err(CaseLensError::Config("classifier.sniff_window must be > 0".into()));
        }
        if self.classifier.scan_window == 0 {
            return Err(CaseLensError::Config("classifier.scan_window must be > 0".into()));
        }
        self.summary.validate()?;
        if self.staging.dir.as_os_str().is_empty() {
            return Err(CaseLensError::Config("staging.dir must not be empty".into()));
        }
        Ok(())
    }
}

/// Classifier windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Header bytes inspected for signatures (default: 512).
    pub sniff_window: usize,
    /// Leading bytes decoded for the indicator scan (default: 10000).
    pub scan_window: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sniff_window: 512,
            scan_window: 10_000,
        }
    }
}

/// Streaming and static summary settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Upper bound on a case's stored text, in characters (default: 1000).
    pub max_chars: usize,
    /// Text of a case with no accumulated output.
    pub initial_text: String,
    /// Prefix of a static-path summary.
    pub final_prefix: String,
    /// Characters of content kept in a static-path summary (default: 500).
    pub final_excerpt_chars: usize,
}

impl SummaryConfig {
    /// The bound must leave room for the marker plus at least one character.
    pub fn validate(&self) -> Result<()> {
        let marker_chars = TRUNCATION_MARKER.chars().count();
        if self.max_chars <= marker_chars {
            return Err(CaseLensError::Config(format!(
                "summary.max_chars must exceed {}",
                marker_chars
            )));
        }
        Ok(())
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_chars: 1000,
            initial_text: "Initiating analysis...".to_string(),
            final_prefix: "Final Summary: ".to_string(),
            final_excerpt_chars: 500,
        }
    }
}

/// Staging destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Directory reserved for staged records; created on demand.
    pub dir: PathBuf,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("staged_artifacts"),
        }
    }
}
