//! Best-effort staging of raw model output and its summary.
//!
//! Each call writes one new pretty-printed JSON file named
//! `<model>-<timestamp>.json` into the staging directory. Failures are
//! logged and swallowed so a staging problem never aborts a case.

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::StagingConfig;
use crate::core::StagedArtifactRecord;
use crate::error::{CaseLensError, Result};

/// Attempts at finding an unused file name before giving up.
const MAX_NAME_ATTEMPTS: usize = 8;

/// Replace path separators so a model name is a single path component.
pub fn sanitize_model_name(model: &str) -> String {
    let cleaned: String = model
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "model".to_string()
    } else {
        cleaned
    }
}

/// RFC 3339 timestamp with nanoseconds and no characters illegal in file names.
pub fn sanitize_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
        .replace([':', '.'], "-")
}

/// File name of a staged record.
pub fn staged_file_name(model: &str, ts: DateTime<Utc>) -> String {
    format!("{}-{}.json", sanitize_model_name(model), sanitize_timestamp(ts))
}

/// Writes [`StagedArtifactRecord`]s to a staging directory.
#[derive(Debug, Clone)]
pub struct StagingWriter {
    dir: PathBuf,
}

impl Default for StagingWriter {
    fn default() -> Self {
        Self::from_config(&StagingConfig::default())
    }
}

impl StagingWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &StagingConfig) -> Self {
        Self::new(config.dir.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stage a record, returning its path, or `None` after logging the failure.
    pub async fn stage_data(
        &self,
        model: &str,
        raw_content: &str,
        summary: &str,
    ) -> Option<PathBuf> {
        match self.try_stage(model, raw_content, summary).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(
                    error = %e,
                    model,
                    dir = %self.dir.display(),
                    "Staging failed; continuing without staged record"
                );
                None
            }
        }
    }

    /// Stage on the current tokio runtime without waiting for the write.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_stage(
        &self,
        model: impl Into<String>,
        raw_content: impl Into<String>,
        summary: impl Into<String>,
    ) -> JoinHandle<Option<PathBuf>> {
        let writer = self.clone();
        let (model, raw_content, summary) = (model.into(), raw_content.into(), summary.into());
        tokio::spawn(async move { writer.stage_data(&model, &raw_content, &summary).await })
    }

    /// Fallible staging path.
    pub async fn try_stage(
        &self,
        model: &str,
        raw_content: &str,
        summary: &str,
    ) -> Result<PathBuf> {
        self.try_stage_at(model, raw_content, summary, Utc::now()).await
    }

    async fn try_stage_at(
        &self,
        model: &str,
        raw_content: &str,
        summary: &str,
        first_ts: DateTime<Utc>,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CaseLensError::Staging {
                path: self.dir.clone(),
                message: format!("cannot create staging directory: {}", e),
            })?;

        let mut record = StagedArtifactRecord::new(model, raw_content, summary);
        record.timestamp = first_ts;
        for _ in 0..MAX_NAME_ATTEMPTS {
            let json = record.to_json_pretty()?;
            let path = self.dir.join(staged_file_name(model, record.timestamp));
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    return match write_new_file(file, &path, json.as_bytes()).await {
                        Ok(()) => {
                            info!(
                                model,
                                path = %path.display(),
                                bytes = json.len(),
                                "Staged record"
                            );
                            Ok(path)
                        }
                        Err(e) => Err(CaseLensError::Staging {
                            path,
                            message: e.to_string(),
                        }),
                    };
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "Staged file name taken; retrying");
                    // File name and record timestamp stay in step
                    record.timestamp = Utc::now();
                }
                Err(e) => {
                    return Err(CaseLensError::Staging {
                        path,
                        message: e.to_string(),
                    })
                }
            }
        }

        Err(CaseLensError::Staging {
            path: self.dir.clone(),
            message: "no unused file name available".to_string(),
        })
    }
}

/// Write `bytes` to a freshly created file, removing the file if the write fails.
///
/// A failed write leaves no partial record behind.
async fn write_new_file<W>(mut out: W, path: &Path, bytes: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        out.write_all(bytes).await?;
        out.flush().await
    }
    .await;
    if written.is_err() {
        drop(out);
        if let Err(e) = fs::remove_file(path).await {
            warn!(error = %e, path = %path.display(), "Could not remove partial staged file");
        }
    }
    written
}
