//! Per-segment completion reporting, decoupled from the counting itself.

use log::{debug, info};

use crate::metrics::SegmentMetrics;
use crate::tally::PartialCount;

/// Observer notified as each worker finishes its segment.
///
/// Purely observational: implementations must not influence the counts, and
/// the aggregation never depends on them. Workers run concurrently, so
/// implementations are required to be `Sync`.
pub trait Progress: Sync {
    /// Called once per segment, with the worker's metrics and its partial map.
    fn segment_counted(&self, metrics: &SegmentMetrics, counts: &PartialCount);
}

/// Reports segment completions through the `log` facade.
///
/// Emits an `info!` summary line per segment and the full partial map at
/// `debug!` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn segment_counted(&self, metrics: &SegmentMetrics, counts: &PartialCount) {
        info!(
            "segment {:>3}: tokens {:>8} distinct {:>8} elapsed {:.2?}",
            metrics.index, metrics.token_count, metrics.distinct_tokens, metrics.elapsed
        );
        debug!("segment {} partial counts: {counts:?}", metrics.index);
    }
}

/// Discards all notifications; used by tests and `show_progress = false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn segment_counted(&self, _metrics: &SegmentMetrics, _counts: &PartialCount) {}
}
