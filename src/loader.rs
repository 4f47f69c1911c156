//! Loads delimited GTFS text tables into ordered sequences of row records.
//!
//! A missing or unreadable file is a continuable condition: the loader emits
//! a diagnostic and substitutes an empty table, so downstream checks report
//! the large-scale absence instead of the run aborting.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::error::GtfsError;

/// One row of a source table: column name mapped to the raw string value.
///
/// Values are kept exactly as they appear in the file. No trimming, no case
/// folding, no type coercion.
pub type Record = HashMap<String, String>;

/// The four GTFS tables this tool consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Routes,
    Trips,
    Stops,
    StopTimes,
}

impl Table {
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Routes => "routes.txt",
            Table::Trips => "trips.txt",
            Table::Stops => "stops.txt",
            Table::StopTimes => "stop_times.txt",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// The four tables of one dataset, rows in file order, duplicates preserved.
#[derive(Debug, Default)]
pub struct GtfsTables {
    pub routes: Vec<Record>,
    pub trips: Vec<Record>,
    pub stops: Vec<Record>,
    pub stop_times: Vec<Record>,
}

impl GtfsTables {
    /// Loads all four tables from a dataset directory.
    pub fn load(dir: &Path) -> Self {
        let tables = GtfsTables {
            routes: load_table(dir, Table::Routes),
            trips: load_table(dir, Table::Trips),
            stops: load_table(dir, Table::Stops),
            stop_times: load_table(dir, Table::StopTimes),
        };

        debug!(
            routes = tables.routes.len(),
            trips = tables.trips.len(),
            stops = tables.stops.len(),
            stop_times = tables.stop_times.len(),
            "Dataset tables loaded"
        );

        tables
    }
}

/// Loads one table, tolerating absence and read failures.
pub fn load_table(dir: &Path, table: Table) -> Vec<Record> {
    match try_load_table(dir, table) {
        Ok(rows) => rows,
        Err(GtfsError::MissingFile(path)) => {
            warn!(file = %path.display(), "Table file not found, continuing with empty table");
            Vec::new()
        }
        Err(e) => {
            error!(table = %table, error = %e, "Table load failed, continuing with empty table");
            Vec::new()
        }
    }
}

fn try_load_table(dir: &Path, table: Table) -> Result<Vec<Record>, GtfsError> {
    let path = dir.join(table.file_name());
    if !path.exists() {
        return Err(GtfsError::MissingFile(path));
    }

    let load_err = |source| GtfsError::Load {
        file: path.clone(),
        source,
    };

    let mut reader = csv::Reader::from_path(&path).map_err(load_err)?;
    let headers = reader.headers().map_err(load_err)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(load_err)?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Looks up `column` in a row, or reports which table, data-row index, and
/// column were missing. Index building and checking do no other row
/// validation.
pub fn require_field<'a>(
    row: &'a Record,
    table: Table,
    index: usize,
    column: &'static str,
) -> Result<&'a str, GtfsError> {
    row.get(column)
        .map(String::as_str)
        .ok_or(GtfsError::MalformedRow {
            table,
            row: index,
            column,
        })
}
