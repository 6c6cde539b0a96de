// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fitforge-cli
// ABOUTME: Table, per-category section, and JSON renderings of aggregation results

use anyhow::Result;
use fitforge::aggregator::AggregationReport;
use fitforge::models::{group_by_category, CategorySection, Record};
use serde_json::json;

use crate::OutputFormat;

const NAME_WIDTH: usize = 32;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn print_rows(records: &[Record]) {
    println!(
        "{:<20} {:<NAME_WIDTH$} {:<24} IMAGE",
        "ID", "NAME", "CATEGORIES"
    );
    println!("{}", "-".repeat(90));
    for record in records {
        let tags = record
            .category_tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<20} {:<NAME_WIDTH$} {:<24} {}",
            record.id,
            truncate(&record.name, NAME_WIDTH),
            tags,
            record.image_url().unwrap_or("-")
        );
    }
}

/// Print all records as one table
pub fn print_table(records: &[Record]) {
    if records.is_empty() {
        println!("No exercises found.");
        return;
    }
    print_rows(records);
}

/// Print one table per requested category
pub fn print_sections(records: &[Record], categories: &[String]) {
    for CategorySection { category, records } in group_by_category(records, categories) {
        println!("\n== {category} ({}) ==", records.len());
        if records.is_empty() {
            println!("No exercises found.");
        } else {
            print_rows(&records);
        }
    }
}

/// Print records and report as one JSON document
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn print_json(
    records: &[Record],
    report: &AggregationReport,
    categories: &[String],
    sections: bool,
) -> Result<()> {
    let document = if sections {
        json!({
            "sections": group_by_category(records, categories),
            "report": report,
        })
    } else {
        json!({
            "records": records,
            "report": report,
        })
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Summary line for table output (JSON output already carries the report)
pub fn print_report_footer(report: &AggregationReport, format: OutputFormat) {
    if format == OutputFormat::Json {
        return;
    }
    println!(
        "\n{} unique exercises from {} categories in {} ms ({} failed categories, {} placeholders, {} with images)",
        report.unique_ids,
        report.categories_requested,
        report.elapsed_ms,
        report.categories_failed,
        report.detail_failures,
        report.records_with_image,
    );
}
