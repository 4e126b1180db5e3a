//! Incremental summarisation for live analysis cases.
//!
//! [`SummaryAccumulator`] keeps one bounded summary per case and emits an
//! update for every chunk; [`SummaryFinalizer`] handles complete blobs and
//! the end of a stream, staging the raw content alongside its summary.

pub mod accumulator;
pub mod events;
pub mod finalizer;

pub use accumulator::{final_summary, keep_tail, SummaryAccumulator, SummaryState};
pub use events::{ChannelListener, NullListener, SummaryListener, SummaryUpdate};
pub use finalizer::{FinalizedSummary, SummaryFinalizer};
