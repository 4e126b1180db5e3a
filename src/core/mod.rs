//! Core value types shared by the classification and summarisation paths.

pub mod classification;
pub mod file_type;
pub mod staged;

pub use classification::{summary_line, ArtifactClassification, BYTES_PER_MIB};
pub use file_type::{mime_for_name, FileType, OCTET_STREAM};
pub use staged::StagedArtifactRecord;
