// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Aggregate command for fitforge-cli
// ABOUTME: Builds the aggregator from environment or synthetic providers and prints the result

use std::sync::Arc;

use anyhow::{bail, Result};
use fitforge::aggregator::{Aggregator, ImageLookup};
use fitforge::cache::ImageCache;
use fitforge::config::{AggregatorConfig, ServerConfig};
use fitforge::providers::{SyntheticExerciseSource, SyntheticImageSource};
use tokio::signal;
use tracing::{info, warn};

use crate::helpers::display;
use crate::OutputFormat;

/// Run one aggregation and print it
pub async fn run(
    categories: &[String],
    limit: Option<usize>,
    format: OutputFormat,
    offline: bool,
    sections: bool,
) -> Result<()> {
    let aggregator = if offline {
        offline_aggregator()?
    } else {
        Aggregator::from_config(&ServerConfig::from_env()?)
    };
    let limit = limit.unwrap_or(aggregator.config().default_per_category_limit);

    info!(?categories, limit, offline, "Starting aggregation");

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let Some((records, report)) = aggregator
        .aggregate_with_report_until(categories, limit, shutdown)
        .await
    else {
        bail!("aggregation interrupted");
    };

    match format {
        OutputFormat::Json => display::print_json(&records, &report, categories, sections)?,
        OutputFormat::Table if sections => display::print_sections(&records, categories),
        OutputFormat::Table => display::print_table(&records),
    }
    display::print_report_footer(&report, format);
    Ok(())
}

/// Aggregator over the built-in catalog; no credentials or network needed
fn offline_aggregator() -> Result<Aggregator> {
    let config = AggregatorConfig::from_env()?;
    config.validate()?;
    let images = ImageLookup::new(
        Some(Arc::new(SyntheticImageSource::demo())),
        ImageCache::new(),
        config.request_timeout,
    )
    .with_max_in_flight(config.fan_out_width);
    Ok(Aggregator::new(
        Arc::new(SyntheticExerciseSource::demo()),
        images,
        config,
    ))
}
