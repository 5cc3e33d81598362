use std::fmt::Write as _;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::info;
use rayon::ThreadPoolBuilder;
use serde_json::json;
use wfreq::{Counter, CounterConfig, FrequencyTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parallel word frequency counter", long_about = None)]
struct Cli {
    /// Text file to count
    input: PathBuf,

    /// Number of segments/workers (defaults to available parallelism)
    #[arg(short = 'w', long, value_name = "N")]
    workers: Option<usize>,

    /// Limit Rayon worker threads
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Only list the N most frequent words
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Emit a machine-readable JSON summary
    #[arg(long)]
    json: bool,

    /// Write the listing to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Disable per-segment progress logging
    #[arg(long)]
    no_progress: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    run_count(cli)
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn run_count(cli: Cli) -> Result<()> {
    if let Some(threads) = cli.threads {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("unable to configure Rayon thread pool")?;
    }

    let workers = cli.workers.unwrap_or_else(default_workers);
    let cfg = CounterConfig::builder()
        .workers(workers)
        .show_progress(!cli.no_progress)
        .build()?;
    let counter = Counter::new(cfg);

    let start = Instant::now();
    let artifacts = counter
        .count_file(&cli.input)
        .with_context(|| format!("failed to count {}", cli.input.display()))?;
    let elapsed = start.elapsed();

    info!(
        "count complete: tokens={} distinct={} workers={workers} duration={elapsed:.2?}",
        artifacts.table.total_tokens(),
        artifacts.table.len()
    );

    let rendered = if cli.json {
        render_json(&cli, &artifacts.table, workers)?
    } else {
        render_listing(&artifacts.table, cli.top)
    };

    if let Some(path) = &cli.output {
        fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "wrote {} words to {}",
            listed_len(&artifacts.table, cli.top),
            path.display()
        );
    } else {
        print!("{rendered}");
    }

    Ok(())
}

fn listed_len(table: &FrequencyTable, top: Option<usize>) -> usize {
    match top {
        Some(n) => n.min(table.len()),
        None => table.len(),
    }
}

fn render_listing(table: &FrequencyTable, top: Option<usize>) -> String {
    let shown = &table.entries()[..listed_len(table, top)];
    let mut out = String::new();
    for (word, count) in shown {
        writeln!(out, "{word}: {count}").expect("writing to a String cannot fail");
    }
    writeln!(
        out,
        "--- {} words, {} distinct ---",
        table.total_tokens(),
        table.len()
    )
    .expect("writing to a String cannot fail");
    out
}

fn render_json(cli: &Cli, table: &FrequencyTable, workers: usize) -> Result<String> {
    let shown = &table.entries()[..listed_len(table, cli.top)];
    let words: Vec<_> = shown
        .iter()
        .map(|(word, count)| json!({ "word": word, "count": count }))
        .collect();
    let record = json!({
        "path": cli.input.display().to_string(),
        "workers": workers,
        "total_tokens": table.total_tokens(),
        "distinct_words": table.len(),
        "words": words,
    });
    let mut rendered = serde_json::to_string(&record)?;
    rendered.push('\n');
    Ok(rendered)
}
