// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fastsearch command-line interface.
//!
//! Three subcommands over a site's `index.json`: `search` runs one query the
//! way the widget would and prints the rendered entries, `inspect` summarizes
//! the corpus, and `navigate` replays arrow-key presses against a query's
//! results to show where focus ends up.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fastsearch",
    about = "Keystroke-driven fuzzy search over a static site index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and print the rendered results
    Search {
        /// Corpus location: file path or http(s) URL
        index: String,

        /// Search query (trimmed, like the search box)
        query: String,

        /// Site config (.toml with [params.fuseOpts], or .json page params)
        #[arg(short, long)]
        config: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the widget markup instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Summarize a corpus file
    Inspect {
        /// Corpus location: file path or http(s) URL
        index: String,
    },

    /// Replay key presses against a query's results
    Navigate {
        /// Corpus location: file path or http(s) URL
        index: String,

        /// Search query typed before navigating
        query: String,

        /// Comma-separated keys: down, up, right, esc
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,

        /// Site config (.toml with [params.fuseOpts], or .json page params)
        #[arg(short, long)]
        config: Option<String>,
    },
}
