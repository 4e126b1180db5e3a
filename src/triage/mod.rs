//! Artifact classification for forensic inputs.
//!
//! This module sniffs the header, measures entropy, scans for suspicious
//! tokens and hashes the buffer, producing a deterministic
//! [`ArtifactClassification`](crate::core::ArtifactClassification).

pub mod api;
pub mod indicators;
pub mod score;
pub mod sniffers;

pub use api::{classify, classify_path, ArtifactClassifier};
pub use indicators::{scan_families, scan_indicators, IndicatorFamily};
pub use score::{recommendations, security_score, Recommendation};
pub use sniffers::{SignatureRule, SignatureSniffer, SIGNATURES};
