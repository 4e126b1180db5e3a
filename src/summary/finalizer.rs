//! End-of-analysis summaries wired to staging.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::staging::StagingWriter;
use crate::summary::accumulator::SummaryAccumulator;

/// Outcome of a finalisation: the summary, and the staged file if the write succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedSummary {
    pub summary: String,
    pub staged_path: Option<PathBuf>,
}

/// Produces final summaries and stages them next to the raw content.
#[derive(Clone)]
pub struct SummaryFinalizer {
    accumulator: Arc<SummaryAccumulator>,
    staging: StagingWriter,
}

impl SummaryFinalizer {
    pub fn new(accumulator: Arc<SummaryAccumulator>, staging: StagingWriter) -> Self {
        Self {
            accumulator,
            staging,
        }
    }

    pub fn accumulator(&self) -> &Arc<SummaryAccumulator> {
        &self.accumulator
    }

    pub fn staging(&self) -> &StagingWriter {
        &self.staging
    }

    /// Static path: summarise a complete blob, notify, then stage blob and summary.
    pub async fn finalize(
        &self,
        case_id: &str,
        model: &str,
        full_content: &str,
    ) -> FinalizedSummary {
        let summary = self.accumulator.extract_summary(case_id, full_content);
        let staged_path = self.staging.stage_data(model, full_content, &summary).await;
        info!(case_id, model, staged = staged_path.is_some(), "Finalized static summary");
        FinalizedSummary {
            summary,
            staged_path,
        }
    }

    /// Streaming path: stage the transcript with the case's current summary.
    pub async fn finish_stream(
        &self,
        case_id: &str,
        model: &str,
        transcript: &str,
    ) -> FinalizedSummary {
        let summary = self.accumulator.current_summary(case_id);
        let staged_path = self.staging.stage_data(model, transcript, &summary).await;
        info!(case_id, model, staged = staged_path.is_some(), "Finalized streamed summary");
        FinalizedSummary {
            summary,
            staged_path,
        }
    }

    /// Static path without awaiting the staging write. Requires a tokio runtime.
    pub fn finalize_detached(&self, case_id: &str, model: &str, full_content: &str) -> String {
        let summary = self.accumulator.extract_summary(case_id, full_content);
        // Detached; the writer logs its own failures
        let _ = self.staging.spawn_stage(model, full_content, summary.clone());
        summary
    }
}
