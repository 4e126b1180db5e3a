//! Case-keyed streaming summary accumulator.
//!
//! Each case owns one bounded text buffer. Chunks are appended as
//! `" {model}: {chunk}"`; when the text grows past the bound only its tail is
//! kept, behind a `"..."` marker, so stored text never exceeds the bound.
//!
//! Distinct cases may be driven from different threads. Chunks for the same
//! case must be submitted by one caller at a time: the accumulator applies
//! them in call order but does not serialise concurrent submitters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::config::{SummaryConfig, TRUNCATION_MARKER};
use crate::error::Result;
use crate::summary::events::SummaryListener;

/// Accumulated display text for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryState {
    pub case_id: String,
    pub text: String,
}

impl SummaryState {
    pub fn new(case_id: impl Into<String>, initial_text: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            text: initial_text.into(),
        }
    }

    /// Append a fragment and enforce the character bound.
    pub fn append(&mut self, fragment: &str, max_chars: usize) -> &str {
        self.text.push_str(fragment);
        if let Some(trimmed) = keep_tail(&self.text, max_chars) {
            self.text = trimmed;
        }
        &self.text
    }
}

/// Return the marker plus the trailing characters when `text` exceeds `max_chars`.
///
/// The result is exactly `max_chars` characters long whenever `max_chars`
/// exceeds the marker; [`SummaryConfig::validate`] enforces that.
pub fn keep_tail(text: &str, max_chars: usize) -> Option<String> {
    let count = text.chars().count();
    if count <= max_chars {
        return None;
    }
    let keep = max_chars.saturating_sub(TRUNCATION_MARKER.chars().count());
    let start = text
        .char_indices()
        .nth(count - keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    Some(format!("{}{}", TRUNCATION_MARKER, &text[start..]))
}

/// Static-path summary: prefix, leading excerpt, ellipsis.
pub fn final_summary(full_content: &str, config: &SummaryConfig) -> String {
    let excerpt: String = full_content.chars().take(config.final_excerpt_chars).collect();
    format!("{}{}{}", config.final_prefix, excerpt, TRUNCATION_MARKER)
}

/// Streaming summary accumulator with an injected update listener.
pub struct SummaryAccumulator {
    config: SummaryConfig,
    states: Mutex<HashMap<String, SummaryState>>,
    listener: Arc<dyn SummaryListener>,
}

impl SummaryAccumulator {
    pub fn new(listener: impl SummaryListener + 'static) -> Self {
        Self::from_parts(SummaryConfig::default(), listener)
    }

    /// Build with custom bounds; rejects a `max_chars` that cannot hold the marker.
    pub fn with_config(
        config: SummaryConfig,
        listener: impl SummaryListener + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, listener))
    }

    fn from_parts(config: SummaryConfig, listener: impl SummaryListener + 'static) -> Self {
        Self {
            config,
            states: Mutex::new(HashMap::new()),
            listener: Arc::new(listener),
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    fn states(&self) -> MutexGuard<'_, HashMap<String, SummaryState>> {
        // Listeners run outside the lock, so a poisoned map is still consistent
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one streamed chunk to the case and return the bounded text.
    pub fn process_stream_chunk(&self, case_id: &str, model_name: &str, chunk: &str) -> String {
        let fragment = format!(" {}: {}", model_name, chunk);
        let text = {
            let mut states = self.states();
            let state = states
                .entry(case_id.to_string())
                .or_insert_with(|| SummaryState::new(case_id, self.config.initial_text.clone()));
            state.append(&fragment, self.config.max_chars).to_string()
        };
        debug!(
            case_id,
            model = model_name,
            chunk_len = chunk.len(),
            summary_chars = text.chars().count(),
            "Processed stream chunk"
        );
        self.listener.on_summary(case_id, &text);
        text
    }

    /// Current text for the case, or the initial text if none is recorded.
    pub fn current_summary(&self, case_id: &str) -> String {
        self.states()
            .get(case_id)
            .map(|s| s.text.clone())
            .unwrap_or_else(|| self.config.initial_text.clone())
    }

    /// Discard accumulated text; the case restarts from the initial text.
    pub fn reset_summary(&self, case_id: &str) {
        let mut states = self.states();
        states.insert(
            case_id.to_string(),
            SummaryState::new(case_id, self.config.initial_text.clone()),
        );
        debug!(case_id, "Reset summary");
    }

    /// Drop a case's state entirely.
    pub fn remove_case(&self, case_id: &str) -> Option<SummaryState> {
        self.states().remove(case_id)
    }

    /// Case identifiers with recorded state, sorted.
    pub fn case_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.states().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Summarise one complete blob and notify the listener. Case state is untouched.
    pub fn extract_summary(&self, case_id: &str, full_content: &str) -> String {
        let summary = final_summary(full_content, &self.config);
        debug!(case_id, content_len = full_content.len(), "Extracted final summary");
        self.listener.on_summary(case_id, &summary);
        summary
    }
}
