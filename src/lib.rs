//! CaseLens: forensic artifact classification and live analysis summaries.
//!
//! Two independent paths share an artifact:
//!
//! - [`triage`] fingerprints raw bytes (file type, entropy, suspicious
//!   indicators, SHA-256) and [`report`] renders the result as Markdown or JSON.
//! - [`summary`] accumulates streamed model output per case into a bounded
//!   display string, and [`staging`] persists raw output with its summary.

pub mod config;
pub mod core;
pub mod entropy;
pub mod error;
pub mod hashing;
pub mod logging;
pub mod report;
pub mod staging;
pub mod summary;
pub mod triage;

pub use crate::config::EngineConfig;
pub use crate::core::{ArtifactClassification, FileType, StagedArtifactRecord};
pub use crate::error::{CaseLensError, Result};
pub use crate::report::{ReportFormat, ReportRenderer};
pub use crate::staging::StagingWriter;
pub use crate::summary::{SummaryAccumulator, SummaryFinalizer, SummaryListener, SummaryUpdate};
pub use crate::triage::{classify, ArtifactClassifier};
