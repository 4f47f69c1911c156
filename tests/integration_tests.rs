use std::path::{Path, PathBuf};

use gtfs_integrity::analyzer::analyze_dataset;
use gtfs_integrity::error::GtfsError;
use gtfs_integrity::loader::Table;
use gtfs_integrity::report::render_dataset_report;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

#[test]
fn test_clean_dataset_has_no_issues() {
    let analysis = analyze_dataset(&fixture("clean")).expect("analysis failed");

    assert_eq!(analysis.tables.routes.len(), 2);
    assert_eq!(analysis.tables.trips.len(), 2);
    assert_eq!(analysis.tables.stops.len(), 2);
    assert_eq!(analysis.tables.stop_times.len(), 3);

    assert_eq!(analysis.report.total(), 0);
    assert_eq!(analysis.report.critical(), 0);
}

#[test]
fn test_broken_dataset_flags_every_kind_of_gap() {
    let analysis = analyze_dataset(&fixture("broken")).expect("analysis failed");
    let report = &analysis.report;

    // R3 has no trips at all; R2's only trip has no stop_times
    assert_eq!(report.routes_without_trips, vec!["R3"]);
    assert_eq!(report.routes_without_stops, vec!["R2", "R3"]);
    assert_eq!(report.routes_without_times, vec!["R2", "R3"]);

    assert_eq!(report.trips_without_stops, vec!["T2", "TX"]);
    assert_eq!(report.trips_without_times, vec!["T2", "TX"]);

    assert_eq!(report.stops_without_trips, vec!["S2"]);
    assert_eq!(report.stops_without_times, vec!["S2"]);

    assert_eq!(report.invalid_route_refs, vec![pair("TX", "RX")]);
    assert_eq!(report.invalid_trip_refs, vec![pair("T9", "S1")]);
    assert_eq!(report.invalid_stop_refs, vec![pair("T1", "S9")]);

    assert_eq!(report.total(), 14);
    // routes_without_times + stops_without_times
    assert_eq!(report.critical(), 3);
}

#[test]
fn test_broken_dataset_report_renders_counts_and_entries() {
    let analysis = analyze_dataset(&fixture("broken")).expect("analysis failed");
    let text = render_dataset_report("broken", &analysis.tables, &analysis.report);

    assert!(text.contains("Loaded 3 routes, 3 trips, 2 stops, 3 stop times"));
    assert!(text.contains("routes_without_trips: 1"));
    assert!(text.contains("  - R3"));
    assert!(text.contains("invalid_route_refs: 1"));
    assert!(text.contains("  - (TX, RX)"));
}

#[test]
fn test_malformed_row_aborts_the_dataset() {
    // trips.txt in this fixture has no route_id column
    let err = analyze_dataset(&fixture("malformed")).unwrap_err();

    match err {
        GtfsError::MalformedRow { table, row, column } => {
            assert_eq!(table, Table::Trips);
            assert_eq!(row, 0);
            assert_eq!(column, "route_id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_directory_with_no_tables_yields_empty_report() {
    let dir = std::env::temp_dir().join("gtfs_integrity_it_no_tables");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let analysis = analyze_dataset(&dir).expect("analysis failed");

    assert!(analysis.tables.routes.is_empty());
    assert!(analysis.tables.trips.is_empty());
    assert!(analysis.tables.stops.is_empty());
    assert!(analysis.tables.stop_times.is_empty());
    assert_eq!(analysis.report.total(), 0);

    std::fs::remove_dir_all(&dir).unwrap();
}
