//! Artifact classification entry points.

use std::path::Path;
use tracing::{debug, info};

use crate::config::ClassifierConfig;
use crate::core::{summary_line, ArtifactClassification};
use crate::entropy::shannon_entropy;
use crate::error::Result;
use crate::hashing::sha256_digest;
use crate::triage::indicators::scan_indicators;
use crate::triage::sniffers::SignatureSniffer;

/// Stateless classifier; a pure function of the input buffer.
#[derive(Debug, Clone, Default)]
pub struct ArtifactClassifier {
    config: ClassifierConfig,
}

impl ArtifactClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a buffer of any length, including empty.
    pub fn classify(&self, data: &[u8]) -> ArtifactClassification {
        let file_type = SignatureSniffer::sniff_with_window(data, self.config.sniff_window);
        let entropy = shannon_entropy(data);
        let suspicious_indicators = scan_indicators(data, self.config.scan_window);
        let hash = sha256_digest(data);
        let size = data.len() as u64;
        let summary = summary_line(file_type, size, entropy, suspicious_indicators.len());

        debug!(
            file_type = %file_type,
            entropy,
            indicators = suspicious_indicators.len(),
            "Classified buffer"
        );

        ArtifactClassification {
            file_type,
            mime_type: file_type.mime_type().to_string(),
            size,
            hash,
            entropy,
            suspicious_indicators,
            summary,
        }
    }

    /// Read a file fully and classify it.
    pub fn classify_path(&self, path: impl AsRef<Path>) -> Result<ArtifactClassification> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let c = self.classify(&data);
        info!(
            path = %path.display(),
            size_bytes = c.size,
            file_type = %c.file_type,
            "Classified artifact"
        );
        Ok(c)
    }
}

/// Classify with default windows.
pub fn classify(data: &[u8]) -> ArtifactClassification {
    ArtifactClassifier::default().classify(data)
}

/// Read and classify a file with default windows.
pub fn classify_path(path: impl AsRef<Path>) -> Result<ArtifactClassification> {
    ArtifactClassifier::default().classify_path(path)
}
