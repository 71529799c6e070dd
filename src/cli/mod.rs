// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glimmer command-line interface.
//!
//! Two subcommands: `search` runs the same pipeline the browser runs against
//! an index file and prints the outcome, and `inspect` summarizes an index so
//! authors can spot pages that will never produce a useful row.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glimmer",
    about = "Client-side page search with ranked excerpts",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to the index JSON (array of {title, content, url})
        index: PathBuf,

        /// Search query
        query: String,

        /// Settings JSON; missing keys take their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Summarize an index file
    Inspect {
        /// Path to the index JSON
        index: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed, colored rows
    Text,
    /// The search outcome as JSON
    Json,
    /// The results-list markup the browser would insert
    Html,
}

/// Log filter level for a `-v` count.
pub fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
