//! Aggregation of per-segment counts into the final frequency map.

use rustc_hash::FxHashMap;

use crate::tally::PartialCount;
use crate::tokenizer::Token;

/// Merges partial counts into a single token frequency map.
///
/// Sums, for every distinct token appearing in any partial map, its counts
/// across all maps; a token absent from a map contributes zero from it. The
/// merge is commutative and associative, so the result is independent of the
/// order in which partial counts arrive.
#[must_use]
pub fn merge_counts<I>(parts: I) -> FxHashMap<Token, usize>
where
    I: IntoIterator<Item = PartialCount>,
{
    parts
        .into_iter()
        .fold(FxHashMap::default(), |mut acc, part| {
            for (token, count) in part {
                *acc.entry(token).or_insert(0) += count;
            }
            acc
        })
}
