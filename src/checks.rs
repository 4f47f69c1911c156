//! The fixed battery of referential-integrity checks.

use serde::Serialize;

use crate::error::GtfsError;
use crate::index::{Adjacency, IdSets};
use crate::loader::{GtfsTables, Table, require_field};

/// Issues found in one dataset, one list per issue kind.
///
/// Entries keep the order their entities appear in the source table.
/// Reference kinds hold identifier pairs; the rest hold single identifiers.
#[derive(Debug, Default, Serialize)]
pub struct IssueReport {
    pub routes_without_trips: Vec<String>,
    pub routes_without_stops: Vec<String>,
    pub routes_without_times: Vec<String>,
    pub trips_without_stops: Vec<String>,
    pub trips_without_times: Vec<String>,
    pub stops_without_trips: Vec<String>,
    pub stops_without_times: Vec<String>,
    pub invalid_route_refs: Vec<(String, String)>,
    pub invalid_trip_refs: Vec<(String, String)>,
    pub invalid_stop_refs: Vec<(String, String)>,
}

impl IssueReport {
    /// Total number of issues across all ten kinds.
    pub fn total(&self) -> usize {
        self.sections().iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Routes and stops with no scheduled times at all.
    pub fn critical(&self) -> usize {
        self.routes_without_times.len() + self.stops_without_times.len()
    }

    /// The ten kinds in reporting order, entries rendered for display.
    pub fn sections(&self) -> Vec<(&'static str, Vec<String>)> {
        fn ids(items: &[String]) -> Vec<String> {
            items.to_vec()
        }
        fn pairs(items: &[(String, String)]) -> Vec<String> {
            items.iter().map(|(a, b)| format!("({a}, {b})")).collect()
        }

        vec![
            ("routes_without_trips", ids(&self.routes_without_trips)),
            ("routes_without_stops", ids(&self.routes_without_stops)),
            ("routes_without_times", ids(&self.routes_without_times)),
            ("trips_without_stops", ids(&self.trips_without_stops)),
            ("trips_without_times", ids(&self.trips_without_times)),
            ("stops_without_trips", ids(&self.stops_without_trips)),
            ("stops_without_times", ids(&self.stops_without_times)),
            ("invalid_route_refs", pairs(&self.invalid_route_refs)),
            ("invalid_trip_refs", pairs(&self.invalid_trip_refs)),
            ("invalid_stop_refs", pairs(&self.invalid_stop_refs)),
        ]
    }
}

/// Runs every check against the loaded tables and their indexes.
///
/// A malformed row aborts the whole dataset's checking; no partial report
/// is produced.
pub fn check_dataset(
    tables: &GtfsTables,
    ids: &IdSets,
    adj: &Adjacency,
) -> Result<IssueReport, GtfsError> {
    let mut issues = IssueReport::default();

    for (i, route) in tables.routes.iter().enumerate() {
        let route_id = require_field(route, Table::Routes, i, "route_id")?;

        match adj.route_to_trips.get(route_id) {
            None => {
                issues.routes_without_trips.push(route_id.to_string());
                issues.routes_without_stops.push(route_id.to_string());
                issues.routes_without_times.push(route_id.to_string());
            }
            Some(trip_ids) => {
                // A route "has stops" the moment any one of its trips has a
                // stop_time, and stop_times presence implies times presence.
                // First match in hash order wins; the order is deliberately
                // unspecified.
                let has_stops = trip_ids.iter().any(|t| adj.trip_to_stops.contains_key(t));
                if !has_stops {
                    issues.routes_without_stops.push(route_id.to_string());
                    issues.routes_without_times.push(route_id.to_string());
                }
            }
        }
    }

    for (i, trip) in tables.trips.iter().enumerate() {
        let trip_id = require_field(trip, Table::Trips, i, "trip_id")?;
        let route_id = require_field(trip, Table::Trips, i, "route_id")?;

        if !adj.trip_to_stops.contains_key(trip_id) {
            issues.trips_without_stops.push(trip_id.to_string());
            issues.trips_without_times.push(trip_id.to_string());
        }

        if !ids.routes.contains(route_id) {
            issues
                .invalid_route_refs
                .push((trip_id.to_string(), route_id.to_string()));
        }
    }

    for (i, stop) in tables.stops.iter().enumerate() {
        let stop_id = require_field(stop, Table::Stops, i, "stop_id")?;

        if !adj.stop_to_trips.contains_key(stop_id) {
            issues.stops_without_trips.push(stop_id.to_string());
            issues.stops_without_times.push(stop_id.to_string());
        }
    }

    for (i, stop_time) in tables.stop_times.iter().enumerate() {
        let trip_id = require_field(stop_time, Table::StopTimes, i, "trip_id")?;
        let stop_id = require_field(stop_time, Table::StopTimes, i, "stop_id")?;

        if !ids.trips.contains(trip_id) {
            issues
                .invalid_trip_refs
                .push((trip_id.to_string(), stop_id.to_string()));
        }
        if !ids.stops.contains(stop_id) {
            issues
                .invalid_stop_refs
                .push((trip_id.to_string(), stop_id.to_string()));
        }
    }

    Ok(issues)
}
