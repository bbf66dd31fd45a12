// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shelfsearch command-line interface.
//!
//! Three subcommands: `search` runs one query against an index file, `expand`
//! shows what a query fans out to, and `interactive` reads queries line by
//! line through the debouncer, the way a search box would feed them.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shelfsearch::Locale;

#[derive(Parser)]
#[command(
    name = "shelfsearch",
    about = "Synonym-expanded fuzzy search over a book and booklist index",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON config file (synonyms, fuzzy options, boost weights, display limit)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to the JSON index (`-` reads stdin)
        #[arg(short, long)]
        index: PathBuf,

        /// Search query
        query: String,

        /// Override the configured display limit
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Language for labels and the result count line
        #[arg(long, value_enum, default_value = "en")]
        locale: Locale,
    },

    /// Show the query strings a search would be expanded into
    Expand {
        /// Search query
        query: String,
    },

    /// Read queries from stdin, one per line, and search each after a quiet period
    Interactive {
        /// Path to the JSON index
        #[arg(short, long)]
        index: PathBuf,

        /// Quiet period before a query runs, in milliseconds
        #[arg(long, default_value = "120")]
        debounce_ms: u64,

        /// Query to run once at startup, before reading stdin
        #[arg(long = "query", value_name = "QUERY")]
        prefill: Option<String>,

        /// Language for labels and the result count line
        #[arg(long, value_enum, default_value = "en")]
        locale: Locale,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}
