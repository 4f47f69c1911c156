//! Error taxonomy for dataset analysis.

use std::path::PathBuf;
use thiserror::Error;

use crate::loader::Table;

/// Errors arising while loading or analyzing a GTFS dataset.
///
/// `MissingFile` and `Load` are recovered inside the loader: downgraded to a
/// diagnostic, with an empty table substituted. `DatasetNotFound` is recovered
/// by the run loop, which skips the dataset. `MalformedRow` is not recovered
/// and aborts the analysis of the dataset it occurred in.
#[derive(Error, Debug)]
pub enum GtfsError {
    #[error("table file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}", file.display())]
    Load {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{table}: row {row}: missing column '{column}'")]
    MalformedRow {
        table: Table,
        row: usize,
        column: &'static str,
    },

    #[error("dataset directory not found: {}", .0.display())]
    DatasetNotFound(PathBuf),
}
