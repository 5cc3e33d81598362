//! Metrics describing a completed counting run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Metrics captured for each segment.
///
/// One instance per worker: reported through the
/// [`Progress`](crate::progress::Progress) observer when the worker finishes
/// and stored in [`CountMetrics::segments`] in segment order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentMetrics {
    /// Index of the segment within the partition.
    pub index: usize,
    /// Number of tokens the worker counted.
    pub token_count: usize,
    /// Number of distinct tokens in the segment.
    pub distinct_tokens: usize,
    /// Wall-clock time the worker spent counting.
    pub elapsed: Duration,
}

/// Aggregate metrics produced by one run of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountMetrics {
    /// Per-segment snapshots, in segment order.
    pub segments: Vec<SegmentMetrics>,
    /// Total token occurrences across the whole input.
    pub total_tokens: usize,
    /// Distinct tokens in the final table.
    pub distinct_tokens: usize,
    /// Total duration of the run, tokenization through merge.
    pub total_duration: Duration,
}
