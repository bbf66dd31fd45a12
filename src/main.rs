// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelfsearch::render::render_outcome_html;
use shelfsearch::{index, Debouncer, Locale, SearchConfig, SearchIndex, SearchPipeline};

mod cli;
use cli::{display, Cli, Commands, OutputFormat};

/// Idle wait when nothing is pending; any new line wakes the loop anyway.
const IDLE_POLL: Duration = Duration::from_secs(3600);

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("SHELFSEARCH_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> shelfsearch::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            format,
            locale,
        } => {
            let mut config = config;
            if let Some(limit) = limit {
                config.display_limit = limit.max(1);
            }
            run_search(&index, config, &query, format, locale)
        }
        Commands::Expand { query } => {
            let queries = config.synonyms.expand(&shelfsearch::normalize(&query));
            display::print_expansion(&queries);
            Ok(())
        }
        Commands::Interactive {
            index,
            debounce_ms,
            prefill,
            locale,
        } => run_interactive(
            &index,
            config,
            Duration::from_millis(debounce_ms),
            prefill,
            locale,
        ),
    }
}

fn load_config(path: Option<&Path>) -> shelfsearch::Result<SearchConfig> {
    match path {
        Some(path) => {
            let config = SearchConfig::load(path)?;
            tracing::debug!(
                path = %path.display(),
                synonyms = config.synonyms.len(),
                display_limit = config.display_limit,
                "loaded config"
            );
            Ok(config)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn load_global(path: &Path) -> shelfsearch::Result<&'static SearchIndex> {
    index::init_global(|| SearchIndex::load(path))
}

fn run_search(
    index_path: &Path,
    config: SearchConfig,
    query: &str,
    format: OutputFormat,
    locale: Locale,
) -> shelfsearch::Result<()> {
    load_global(index_path)?;
    let pipeline = SearchPipeline::from_global(config)?;
    let outcome = pipeline.run(query);

    match format {
        OutputFormat::Text => display::print_outcome(&outcome, locale),
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Html => print!("{}", render_outcome_html(&outcome, locale)),
    }
    Ok(())
}

/// Feed stdin lines through the debouncer, running only the last query of
/// each burst. EOF flushes whatever is still pending.
fn run_interactive(
    index_path: &Path,
    config: SearchConfig,
    delay: Duration,
    prefill: Option<String>,
    locale: Locale,
) -> shelfsearch::Result<()> {
    load_global(index_path)?;
    let pipeline = SearchPipeline::from_global(config)?;

    if let Some(query) = prefill.filter(|q| !q.trim().is_empty()) {
        display::print_outcome(&pipeline.run(&query), locale);
    }

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut debouncer = Debouncer::new(delay);
    loop {
        let wait = debouncer
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        match rx.recv_timeout(wait) {
            Ok(line) => {
                if let Some(superseded) = debouncer.submit(Instant::now(), line) {
                    tracing::trace!(query = %superseded, "superseded pending query");
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(query) = debouncer.poll(Instant::now()) {
                    display::print_outcome(&pipeline.run(&query), locale);
                    io::stdout().flush()?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(query) = debouncer.flush() {
                    display::print_outcome(&pipeline.run(&query), locale);
                }
                break;
            }
        }
    }
    Ok(())
}
