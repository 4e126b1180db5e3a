//! Summary update notifications.
//!
//! The accumulator emits a [`SummaryUpdate`] for every streamed chunk and
//! every static-path extraction. Listeners are fixed at construction.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// A new summary for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryUpdate {
    pub case_id: String,
    pub summary: String,
}

/// Receiver of summary updates.
///
/// Called synchronously from the accumulator, outside its internal lock.
pub trait SummaryListener: Send + Sync {
    fn on_summary(&self, case_id: &str, summary: &str);
}

impl<F> SummaryListener for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_summary(&self, case_id: &str, summary: &str) {
        self(case_id, summary)
    }
}

/// Forwards updates into an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<SummaryUpdate>,
}

impl ChannelListener {
    /// Create a listener and the receiving half the orchestrator subscribes with.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SummaryUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn from_sender(tx: mpsc::UnboundedSender<SummaryUpdate>) -> Self {
        Self { tx }
    }
}

impl SummaryListener for ChannelListener {
    fn on_summary(&self, case_id: &str, summary: &str) {
        let update = SummaryUpdate {
            case_id: case_id.to_string(),
            summary: summary.to_string(),
        };
        if self.tx.send(update).is_err() {
            debug!(case_id, "Summary receiver dropped; update discarded");
        }
    }
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl SummaryListener for NullListener {
    fn on_summary(&self, _case_id: &str, _summary: &str) {}
}
