//! Identifier sets and cross-reference adjacency indexes.

use std::collections::{HashMap, HashSet};

use crate::error::GtfsError;
use crate::loader::{GtfsTables, Table, require_field};

/// The primary identifiers appearing in each table, deduplicated.
///
/// Membership tests only. Duplicate identifiers within one table collapse
/// silently; uniqueness is not validated here.
#[derive(Debug, Default)]
pub struct IdSets {
    pub routes: HashSet<String>,
    pub trips: HashSet<String>,
    pub stops: HashSet<String>,
}

impl IdSets {
    pub fn build(tables: &GtfsTables) -> Result<Self, GtfsError> {
        let mut ids = IdSets::default();

        for (i, route) in tables.routes.iter().enumerate() {
            let route_id = require_field(route, Table::Routes, i, "route_id")?;
            ids.routes.insert(route_id.to_string());
        }
        for (i, trip) in tables.trips.iter().enumerate() {
            let trip_id = require_field(trip, Table::Trips, i, "trip_id")?;
            ids.trips.insert(trip_id.to_string());
        }
        for (i, stop) in tables.stops.iter().enumerate() {
            let stop_id = require_field(stop, Table::Stops, i, "stop_id")?;
            ids.stops.insert(stop_id.to_string());
        }

        Ok(ids)
    }
}

/// Many-to-many relations between routes, trips, and stops.
///
/// A key absent from a map means the entity has an empty related set; the
/// maps never hold empty sets. Inner-set iteration order is unspecified.
#[derive(Debug, Default)]
pub struct Adjacency {
    pub route_to_trips: HashMap<String, HashSet<String>>,
    pub trip_to_stops: HashMap<String, HashSet<String>>,
    pub stop_to_trips: HashMap<String, HashSet<String>>,
}

impl Adjacency {
    /// One pass over trips populates route→trips; one pass over stop_times
    /// populates trip→stops and stop→trips simultaneously. Rows are not
    /// filtered: a row missing a required key aborts the build.
    pub fn build(tables: &GtfsTables) -> Result<Self, GtfsError> {
        let mut adj = Adjacency::default();

        for (i, trip) in tables.trips.iter().enumerate() {
            let route_id = require_field(trip, Table::Trips, i, "route_id")?;
            let trip_id = require_field(trip, Table::Trips, i, "trip_id")?;
            adj.route_to_trips
                .entry(route_id.to_string())
                .or_default()
                .insert(trip_id.to_string());
        }

        for (i, stop_time) in tables.stop_times.iter().enumerate() {
            let trip_id = require_field(stop_time, Table::StopTimes, i, "trip_id")?;
            let stop_id = require_field(stop_time, Table::StopTimes, i, "stop_id")?;
            adj.trip_to_stops
                .entry(trip_id.to_string())
                .or_default()
                .insert(stop_id.to_string());
            adj.stop_to_trips
                .entry(stop_id.to_string())
                .or_default()
                .insert(trip_id.to_string());
        }

        Ok(adj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Record;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_tables() -> GtfsTables {
        GtfsTables {
            routes: vec![record(&[("route_id", "R1")]), record(&[("route_id", "R1")])],
            trips: vec![
                record(&[("trip_id", "T1"), ("route_id", "R1")]),
                record(&[("trip_id", "T2"), ("route_id", "R1")]),
            ],
            stops: vec![record(&[("stop_id", "S1")]), record(&[("stop_id", "S2")])],
            stop_times: vec![
                record(&[("trip_id", "T1"), ("stop_id", "S1")]),
                record(&[("trip_id", "T1"), ("stop_id", "S2")]),
            ],
        }
    }

    #[test]
    fn test_id_sets_deduplicate() {
        let ids = IdSets::build(&sample_tables()).unwrap();

        assert_eq!(ids.routes.len(), 1);
        assert!(ids.routes.contains("R1"));
        assert_eq!(ids.trips.len(), 2);
        assert_eq!(ids.stops.len(), 2);
    }

    #[test]
    fn test_adjacency_relations() {
        let adj = Adjacency::build(&sample_tables()).unwrap();

        assert_eq!(adj.route_to_trips["R1"].len(), 2);
        assert_eq!(adj.trip_to_stops["T1"].len(), 2);
        assert!(adj.stop_to_trips["S1"].contains("T1"));
        assert!(adj.stop_to_trips["S2"].contains("T1"));
        // T2 has no stop_times, so it never gets a (possibly empty) entry
        assert!(!adj.trip_to_stops.contains_key("T2"));
    }

    #[test]
    fn test_missing_key_aborts_build() {
        let mut tables = sample_tables();
        tables.trips.push(record(&[("trip_id", "T3")]));

        let err = Adjacency::build(&tables).unwrap_err();
        match err {
            GtfsError::MalformedRow { table, row, column } => {
                assert_eq!(table, Table::Trips);
                assert_eq!(row, 2);
                assert_eq!(column, "route_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_tables_build_empty_indexes() {
        let tables = GtfsTables::default();

        let ids = IdSets::build(&tables).unwrap();
        let adj = Adjacency::build(&tables).unwrap();

        assert!(ids.routes.is_empty());
        assert!(adj.route_to_trips.is_empty());
        assert!(adj.trip_to_stops.is_empty());
        assert!(adj.stop_to_trips.is_empty());
    }
}
