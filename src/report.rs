//! Rendering of per-dataset reports and the cross-dataset summary.
//!
//! Reports go to stdout as plain text; diagnostics stay on the tracing
//! subscriber. Rendering is side-effect free so it can be tested directly.

use std::fmt::Write as _;

use anyhow::Result;

use crate::checks::IssueReport;
use crate::loader::GtfsTables;

/// How many offending entries each issue kind shows before truncating.
const MAX_SHOWN: usize = 10;

/// Outcome of one configured dataset, as shown in the overall summary.
#[derive(Debug)]
pub enum DatasetOutcome {
    Analyzed {
        name: String,
        total: usize,
        critical: usize,
    },
    Failed {
        name: String,
        error: String,
    },
    Missing {
        name: String,
    },
}

/// Renders the loaded counts and every issue kind for one dataset.
pub fn render_dataset_report(label: &str, tables: &GtfsTables, report: &IssueReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n=== Analyzing GTFS dataset: {label} ===");
    let _ = writeln!(
        out,
        "Loaded {} routes, {} trips, {} stops, {} stop times",
        tables.routes.len(),
        tables.trips.len(),
        tables.stops.len(),
        tables.stop_times.len()
    );

    let _ = writeln!(out, "\n=== ISSUES FOUND ===");
    for (kind, entries) in report.sections() {
        let _ = writeln!(out, "{kind}: {}", entries.len());
        for entry in entries.iter().take(MAX_SHOWN) {
            let _ = writeln!(out, "  - {entry}");
        }
        if entries.len() > MAX_SHOWN {
            let _ = writeln!(out, "  ... and {} more", entries.len() - MAX_SHOWN);
        }
    }

    out
}

/// Renders the cross-dataset summary: total and critical issue counts per
/// analyzed dataset, and a note for each failed or missing one.
pub fn render_summary(outcomes: &[DatasetOutcome]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n=== OVERALL SUMMARY ===");
    for outcome in outcomes {
        match outcome {
            DatasetOutcome::Analyzed {
                name,
                total,
                critical,
            } => {
                let _ = writeln!(out, "\n{name}:");
                let _ = writeln!(out, "  Total issues: {total}");
                let _ = writeln!(
                    out,
                    "  Critical issues (routes/stops without times): {critical}"
                );
            }
            DatasetOutcome::Failed { name, error } => {
                let _ = writeln!(out, "\n{name}:");
                let _ = writeln!(out, "  Analysis failed: {error}");
            }
            DatasetOutcome::Missing { name } => {
                let _ = writeln!(out, "\n{name}:");
                let _ = writeln!(out, "  Dataset not found");
            }
        }
    }

    out
}

/// Prints an issue report as pretty-printed JSON to stdout.
pub fn print_json(report: &IssueReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
