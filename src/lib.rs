//! Parallel word frequency counting library and CLI.
//!
//! The crate exposes both a library API and a `wfreq` command line interface
//! for counting word frequencies in text. The input is tokenized once, split
//! into contiguous segments, counted by one parallel worker per segment, and
//! the partial counts are merged into a [`FrequencyTable`] listing words most
//! frequent first, ties broken by first encounter.
//!
//! ```
//! use wfreq::{Counter, CounterConfig};
//!
//! # fn main() -> wfreq::Result<()> {
//! let cfg = CounterConfig::builder()
//!     .workers(4)
//!     .show_progress(false)
//!     .build()?;
//! let counter = Counter::new(cfg);
//! let artifacts = counter.count_text("The cat sat. The CAT sat!")?;
//! assert_eq!(artifacts.table.count("cat"), 2);
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature. Users targeting
//! the library portion only can disable default features to avoid the CLI
//! dependencies: `wfreq = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod corpus;
pub mod counter;
pub mod error;
pub mod merge;
pub mod metrics;
pub mod progress;
pub mod segment;
pub mod table;
pub mod tally;
pub mod tokenizer;

pub use config::{CounterBuilder, CounterConfig};
pub use counter::{Counter, CounterArtifacts};
pub use error::{Result, WfreqError};
pub use metrics::{CountMetrics, SegmentMetrics};
pub use progress::{LogProgress, Progress, SilentProgress};
pub use table::FrequencyTable;
pub use tally::PartialCount;
pub use tokenizer::Token;
