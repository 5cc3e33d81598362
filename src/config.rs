//! Configuration builder controlling the counting pipeline.

use crate::error::{Result, WfreqError};
use serde::{Deserialize, Serialize};

/// Configuration for a word frequency count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterConfig {
    /// Number of segments the token sequence is split into, one worker per segment.
    pub workers: usize,
    /// Enables per-segment completion logging through the `log` facade.
    pub show_progress: bool,
}

impl CounterConfig {
    /// Returns a builder initialised with [`CounterConfig::default`].
    #[must_use]
    pub fn builder() -> CounterBuilder {
        CounterBuilder::default()
    }

    /// Validates the invariants required for counting.
    ///
    /// Runs before any work is spawned; a failure here means no tokenization,
    /// segmentation, or worker activity has happened.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(WfreqError::InvalidConfig(
                "workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            show_progress: true,
        }
    }
}

/// Builder for [`CounterConfig`].
#[derive(Debug, Default, Clone)]
pub struct CounterBuilder {
    cfg: CounterConfig,
}

impl CounterBuilder {
    /// Creates a builder with [`CounterConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of parallel workers (and therefore segments).
    #[must_use]
    pub fn workers(mut self, value: usize) -> Self {
        self.cfg.workers = value;
        self
    }

    /// Enables or disables per-segment completion logging.
    #[must_use]
    pub fn show_progress(mut self, enabled: bool) -> Self {
        self.cfg.show_progress = enabled;
        self
    }

    /// Finalises the builder, returning a validated [`CounterConfig`].
    pub fn build(self) -> Result<CounterConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
