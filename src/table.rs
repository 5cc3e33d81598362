//! Final frequency table and its presentation-order contract.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

use crate::tokenizer::Token;

/// Merged word frequency table for a whole input.
///
/// Built once by the [`Counter`](crate::Counter) and read-only afterward.
/// [`entries`](FrequencyTable::entries) holds the external listing contract:
/// tokens sorted by descending count, ties broken by first-encounter order in
/// the original token sequence, so the listing is identical across runs and
/// platforms.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Token, usize)>,
    positions: FxHashMap<Token, usize>,
    total_tokens: usize,
}

impl FrequencyTable {
    /// Builds a table from merged counts and the token sequence they came from.
    ///
    /// The sequence is only consulted for the first-encounter tie-break; the
    /// counts themselves are taken as-is.
    pub fn from_counts(counts: FxHashMap<Token, usize>, tokens: &[Token]) -> Self {
        let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (position, token) in tokens.iter().enumerate() {
            first_seen.entry(token).or_insert(position);
        }

        let total_tokens = counts.values().sum();
        let mut entries: Vec<(Token, usize)> = counts.into_iter().collect();
        entries.sort_by_key(|(token, count)| {
            (
                Reverse(*count),
                first_seen.get(token.as_str()).copied().unwrap_or(usize::MAX),
            )
        });

        let positions = entries
            .iter()
            .enumerate()
            .map(|(rank, (token, _))| (token.clone(), rank))
            .collect();

        Self {
            entries,
            positions,
            total_tokens,
        }
    }

    /// Returns the occurrence count for a token, zero when absent.
    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.positions
            .get(token)
            .map_or(0, |&rank| self.entries[rank].1)
    }

    /// Returns the `(token, count)` pairs in presentation order.
    #[must_use]
    pub fn entries(&self) -> &[(Token, usize)] {
        &self.entries
    }

    /// Iterates the listing most frequent first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of distinct tokens in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the input contained no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of token occurrences across the whole input.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }
}
