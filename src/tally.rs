//! Per-segment counting: one worker's view of the pipeline.

use rustc_hash::FxHashMap;

use crate::tokenizer::Token;

/// Token frequency map produced by one worker for one segment.
///
/// Owned exclusively by the worker that produced it until it is handed to
/// [`merge_counts`](crate::merge::merge_counts).
pub type PartialCount = FxHashMap<Token, usize>;

/// Counts token frequencies within a single segment.
///
/// Counts exactly the tokens in the slice; an empty segment yields an empty
/// map. No error conditions.
#[must_use]
pub fn tally_segment(segment: &[Token]) -> PartialCount {
    let mut counts = PartialCount::default();
    for token in segment {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
