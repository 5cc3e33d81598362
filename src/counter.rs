//! Orchestration of the tokenize → segment → count → merge pipeline.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::{CounterBuilder, CounterConfig};
use crate::corpus::load_text;
use crate::error::Result;
use crate::merge::merge_counts;
use crate::metrics::{CountMetrics, SegmentMetrics};
use crate::progress::{LogProgress, Progress, SilentProgress};
use crate::segment::segment_tokens;
use crate::table::FrequencyTable;
use crate::tally::{tally_segment, PartialCount};
use crate::tokenizer::tokenize;

/// High-level façade configuring and executing counting runs.
#[derive(Debug, Clone)]
pub struct Counter {
    cfg: CounterConfig,
}

/// Artifacts returned after a counting run completes.
#[must_use]
#[derive(Debug, Clone)]
pub struct CounterArtifacts {
    /// Final frequency table with the presentation ordering.
    pub table: FrequencyTable,
    /// Metrics captured during the run.
    pub metrics: CountMetrics,
}

impl Counter {
    /// Creates a new counter for the supplied configuration.
    #[must_use]
    pub fn new(cfg: CounterConfig) -> Self {
        Self { cfg }
    }

    /// Returns a [`CounterBuilder`] with default settings.
    #[must_use]
    pub fn builder() -> CounterBuilder {
        CounterConfig::builder()
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &CounterConfig {
        &self.cfg
    }

    /// Counts word frequencies in a file on disk.
    ///
    /// File acquisition errors (missing, unreadable, empty) surface here
    /// before any counting work starts.
    pub fn count_file<P: AsRef<Path>>(&self, path: P) -> Result<CounterArtifacts> {
        let text = load_text(path)?;
        self.count_text(&text)
    }

    /// Counts word frequencies in an in-memory string.
    ///
    /// Per-segment completions are reported through the `log` facade when
    /// `show_progress` is enabled, and discarded otherwise.
    pub fn count_text(&self, text: &str) -> Result<CounterArtifacts> {
        if self.cfg.show_progress {
            self.count_text_observed(text, &LogProgress)
        } else {
            self.count_text_observed(text, &SilentProgress)
        }
    }

    /// Counts word frequencies, reporting each segment completion to `progress`.
    ///
    /// Validates the configuration first: an invalid worker count fails here,
    /// before tokenization or any parallel work. Each worker counts its own
    /// disjoint segment and returns the partial map as its task result; the
    /// indexed `collect` is the join barrier, so the merge runs strictly
    /// after every worker has completed.
    pub fn count_text_observed(
        &self,
        text: &str,
        progress: &dyn Progress,
    ) -> Result<CounterArtifacts> {
        self.cfg.validate()?;

        let run_start = Instant::now();
        let tokens = tokenize(text);
        let segments = segment_tokens(&tokens, self.cfg.workers);

        let tallies: Vec<(PartialCount, SegmentMetrics)> = segments
            .par_iter()
            .enumerate()
            .map(|(index, segment)| {
                let start = Instant::now();
                let counts = tally_segment(segment);
                let metrics = SegmentMetrics {
                    index,
                    token_count: segment.len(),
                    distinct_tokens: counts.len(),
                    elapsed: start.elapsed(),
                };
                progress.segment_counted(&metrics, &counts);
                (counts, metrics)
            })
            .collect();

        let (partials, segment_metrics): (Vec<_>, Vec<_>) = tallies.into_iter().unzip();
        let table = FrequencyTable::from_counts(merge_counts(partials), &tokens);
        debug_assert_eq!(table.total_tokens(), tokens.len());

        let metrics = CountMetrics {
            segments: segment_metrics,
            total_tokens: table.total_tokens(),
            distinct_tokens: table.len(),
            total_duration: run_start.elapsed(),
        };

        if self.cfg.show_progress {
            info!(
                "counted {} tokens ({} distinct) across {} segments in {:.2?}",
                metrics.total_tokens,
                metrics.distinct_tokens,
                self.cfg.workers,
                metrics.total_duration
            );
        }

        Ok(CounterArtifacts { table, metrics })
    }
}

impl fmt::Display for CounterArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} distinct words over {} tokens",
            self.table.len(),
            self.table.total_tokens()
        )?;
        writeln!(f, "Segments: {}", self.metrics.segments.len())?;
        writeln!(f, "Total duration: {:?}", self.metrics.total_duration)?;
        Ok(())
    }
}
