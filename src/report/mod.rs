//! Report rendering for classified artifacts.
//!
//! Rendering is a pure function of the classification and the timestamp
//! captured when the report is rendered.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

use crate::core::ArtifactClassification;
use crate::error::CaseLensError;
use crate::triage::score::{recommendations, security_score, MAX_SCORE};

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => f.write_str("markdown"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = CaseLensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(CaseLensError::InvalidInput(format!(
                "unsupported report format: {}",
                other
            ))),
        }
    }
}

/// Stateless report renderer.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Render using the current time as the generation timestamp.
    pub fn render(classification: &ArtifactClassification, format: ReportFormat) -> String {
        Self::render_at(classification, format, Utc::now())
    }

    /// Render with an explicit generation timestamp.
    pub fn render_at(
        classification: &ArtifactClassification,
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> String {
        match format {
            ReportFormat::Json => Self::render_json(classification),
            ReportFormat::Markdown => Self::render_markdown(classification, generated_at),
        }
    }

    fn render_json(c: &ArtifactClassification) -> String {
        c.to_json_pretty().unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize classification");
            String::from("{}")
        })
    }

    fn render_markdown(c: &ArtifactClassification, generated_at: DateTime<Utc>) -> String {
        let level = c.entropy_level();
        let mut lines = vec![
            "# Artifact Analysis Report".to_string(),
            String::new(),
            format!(
                "**Generated:** {}",
                generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            format!("**File Type:** {}", c.file_type),
            format!("**Size:** {} bytes ({:.2} MB)", c.size, c.size_mib()),
            format!("**SHA-256:** `{}`", c.hash),
            format!("**Entropy:** {:.2} ({})", c.entropy, level),
            String::new(),
            "## Summary".to_string(),
            String::new(),
            c.summary.clone(),
            String::new(),
            "## Security Indicators".to_string(),
            String::new(),
        ];

        if c.suspicious_indicators.is_empty() {
            lines.push("No suspicious indicators detected.".to_string());
        } else {
            lines.extend(c.suspicious_indicators.iter().map(|i| format!("- {}", i)));
        }

        lines.extend([
            String::new(),
            "## Technical Details".to_string(),
            String::new(),
            format!("- **MIME Type:** {}", c.mime_type),
            format!("- **File Type:** {}", c.file_type),
            format!("- **Entropy:** {:.4} bits/byte ({})", c.entropy, level),
            format!("- **Security Score:** {}/{}", security_score(c), MAX_SCORE),
            String::new(),
            "## Recommendations".to_string(),
            String::new(),
        ]);
        lines.extend(recommendations(c).iter().map(|r| format!("- {}", r)));
        lines.push(String::new());

        lines.join("\n")
    }
}
