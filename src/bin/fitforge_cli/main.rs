// ABOUTME: FitForge CLI - command-line front end for the exercise aggregator
// ABOUTME: Runs aggregations against live or offline providers and lists category keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Aggregate chest and biceps exercises from wger, enriched with Pexels images
//! PEXELS_API_KEY=... fitforge-cli aggregate --category chest --category biceps
//!
//! # Same, without network access, grouped per category
//! fitforge-cli aggregate --category chest --category biceps --offline --sections
//!
//! # JSON output with the aggregation report
//! fitforge-cli aggregate --category quads --limit 5 --format json
//!
//! # List known category keys
//! fitforge-cli categories
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fitforge::logging;

#[derive(Parser)]
#[command(
    name = "fitforge-cli",
    about = "FitForge exercise aggregator CLI",
    long_about = "Aggregates exercises across muscle-group categories from a workout provider and enriches them with images."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Aggregate exercises for one or more categories
    Aggregate {
        /// Category key (repeatable), e.g. chest, biceps, quads
        #[arg(long = "category", short = 'c', required = true)]
        categories: Vec<String>,

        /// Maximum exercises listed per category (defaults to the configured limit)
        #[arg(long, short = 'l')]
        limit: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Use the built-in synthetic providers instead of the network
        #[arg(long)]
        offline: bool,

        /// Print one section per requested category
        #[arg(long)]
        sections: bool,
    },

    /// List the category keys understood by the wger provider
    Categories,
}

/// Output format for aggregation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON document with records and report
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose.then_some("debug"))?;

    match cli.command {
        Command::Aggregate {
            categories,
            limit,
            format,
            offline,
            sections,
        } => {
            commands::aggregate::run(&categories, limit, format, offline, sections).await?;
        }
        Command::Categories => commands::categories::run(),
    }

    Ok(())
}
