//! Partitioning of the token sequence into per-worker segments.

use crate::tokenizer::Token;

/// Divides a token sequence into exactly `workers` contiguous segments.
///
/// Base segment size is `len / workers`; every segment except the last takes
/// exactly that many tokens, starting at `i * base`, and the final segment
/// runs to the end of the sequence. Concatenating the returned slices in
/// order reproduces the input exactly: every token belongs to exactly one
/// segment and segments are never re-interleaved.
///
/// When `workers` exceeds the token count, the base size is zero: leading
/// segments are empty and the final segment holds the whole sequence. Empty
/// segments are still returned, never dropped.
///
/// `workers` must be at least 1; [`Counter`](crate::Counter) validates this
/// before any segmentation happens.
#[must_use]
pub fn segment_tokens(tokens: &[Token], workers: usize) -> Vec<&[Token]> {
    debug_assert!(workers >= 1, "worker count validated at the boundary");
    let base = tokens.len() / workers;
    (0..workers)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == workers {
                tokens.len()
            } else {
                start + base
            };
            &tokens[start..end]
        })
        .collect()
}
