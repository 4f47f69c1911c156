//! Per-dataset analysis pipeline and the cross-dataset run loop.

use std::path::Path;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::checks::{IssueReport, check_dataset};
use crate::config::RunConfig;
use crate::error::GtfsError;
use crate::index::{Adjacency, IdSets};
use crate::loader::GtfsTables;
use crate::report::{DatasetOutcome, print_json, render_dataset_report, render_summary};

/// Everything produced by analyzing one dataset directory.
#[derive(Debug)]
pub struct DatasetAnalysis {
    pub tables: GtfsTables,
    pub report: IssueReport,
}

/// Runs the Loader → Index Builder → Checker pipeline on one directory.
///
/// Missing or unreadable table files become empty tables; a malformed row
/// aborts the analysis with no partial report.
pub fn analyze_dataset(dir: &Path) -> Result<DatasetAnalysis, GtfsError> {
    let tables = GtfsTables::load(dir);
    let ids = IdSets::build(&tables)?;
    let adj = Adjacency::build(&tables)?;
    let report = check_dataset(&tables, &ids, &adj)?;
    Ok(DatasetAnalysis { tables, report })
}

fn analyze_configured(dir: &Path) -> Result<DatasetAnalysis, GtfsError> {
    if !dir.is_dir() {
        return Err(GtfsError::DatasetNotFound(dir.to_path_buf()));
    }
    analyze_dataset(dir)
}

/// Analyzes every configured dataset in turn and prints the per-dataset
/// reports followed by the overall summary.
///
/// Data-quality issues never fail the run. A malformed row aborts only the
/// dataset it occurred in; a missing dataset directory is skipped. Both are
/// noted in the summary.
pub fn run(config: &RunConfig) -> Result<()> {
    let mut outcomes = Vec::new();

    for dir in &config.datasets {
        let name = dataset_name(dir);

        match analyze_configured(dir) {
            Ok(analysis) => {
                info!(
                    dataset = %dir.display(),
                    total = analysis.report.total(),
                    critical = analysis.report.critical(),
                    "Dataset analyzed"
                );
                print!(
                    "{}",
                    render_dataset_report(&dir.display().to_string(), &analysis.tables, &analysis.report)
                );
                if config.json {
                    print_json(&analysis.report)?;
                }
                outcomes.push(DatasetOutcome::Analyzed {
                    name,
                    total: analysis.report.total(),
                    critical: analysis.report.critical(),
                });
            }
            Err(GtfsError::DatasetNotFound(_)) => {
                warn!(dataset = %dir.display(), "Dataset directory not found, skipping");
                println!("Dataset {} not found", dir.display());
                outcomes.push(DatasetOutcome::Missing { name });
            }
            Err(e) => {
                error!(dataset = %dir.display(), error = %e, "Dataset analysis aborted");
                outcomes.push(DatasetOutcome::Failed {
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    print!("{}", render_summary(&outcomes));
    Ok(())
}

/// The summary labels datasets by their final path component.
fn dataset_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
