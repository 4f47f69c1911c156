//! Run configuration: which dataset directories to analyze.
//!
//! The analysis core only ever sees an injected [`RunConfig`]; defaults live
//! here, at the CLI boundary.

use std::path::PathBuf;

use tracing::debug;

/// Dataset directories bundled with the documentation site, used when
/// neither the CLI nor the environment provides a list.
const DEFAULT_DATASETS: &[&str] = &[
    "docs/assets/gtfs/amb_bus",
    "docs/assets/gtfs/gencat_bus_interurba",
];

/// Comma-separated dataset list, read when no CLI paths are given.
const DATASETS_ENV: &str = "GTFS_DATASETS";

/// Configuration injected into [`crate::analyzer::run`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub datasets: Vec<PathBuf>,
    /// Also print each dataset's issue report as JSON.
    pub json: bool,
}

impl RunConfig {
    /// Resolves the dataset list: CLI paths win, then `GTFS_DATASETS`, then
    /// the built-in defaults.
    pub fn resolve(cli_datasets: Vec<PathBuf>, json: bool) -> Self {
        let datasets = if !cli_datasets.is_empty() {
            cli_datasets
        } else if let Ok(raw) = std::env::var(DATASETS_ENV) {
            debug!(%raw, "Dataset list taken from GTFS_DATASETS");
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect()
        } else {
            DEFAULT_DATASETS.iter().map(PathBuf::from).collect()
        };

        RunConfig { datasets, json }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_paths_win() {
        let config = RunConfig::resolve(vec![PathBuf::from("data/feed_a")], true);

        assert_eq!(config.datasets, vec![PathBuf::from("data/feed_a")]);
        assert!(config.json);
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        // GTFS_DATASETS is not set in the test environment
        let config = RunConfig::resolve(Vec::new(), false);

        assert_eq!(config.datasets.len(), DEFAULT_DATASETS.len());
        assert_eq!(
            config.datasets[0],
            PathBuf::from("docs/assets/gtfs/amb_bus")
        );
        assert!(!config.json);
    }
}
