//! # Planner Configuration
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty or partial file is valid:
//!
//! ```yaml
//! seed_directory: ./seed
//! store_latency_ms: 250
//! placeholder_destination: TBD
//! default_traveler_name: You
//! default_cover_image: https://example.com/cover.jpg
//! upcoming_trip_limit: 3
//! ```
//!
//! Lookup order: an explicit path, then `TRIP_PLANNER_CONFIG`, then
//! `<config dir>/trip-planner/config.yaml`, then built-in defaults.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "TRIP_PLANNER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Directory holding the JSON seed files; `None` starts with empty stores
    pub seed_directory: Option<PathBuf>,
    /// Simulated latency applied uniformly to every store operation
    pub store_latency_ms: u64,
    /// Destination used when a trip is created without any
    pub placeholder_destination: String,
    /// Name of the traveler attached to newly created trips
    pub default_traveler_name: String,
    /// Cover image assigned to trips created without one
    pub default_cover_image: Option<String>,
    /// How many trips the upcoming list returns
    pub upcoming_trip_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed_directory: None,
            store_latency_ms: 0,
            placeholder_destination: "TBD".to_string(),
            default_traveler_name: "You".to_string(),
            default_cover_image: None,
            upcoming_trip_limit: 3,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PlannerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration using the standard lookup order
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        if let Some(path) = Self::default_path().filter(|path| path.exists()) {
            return Self::from_file(&path);
        }

        info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// `<config dir>/trip-planner/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trip-planner").join("config.yaml"))
    }

    pub fn store_latency(&self) -> Duration {
        Duration::from_millis(self.store_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.placeholder_destination, "TBD");
        assert_eq!(config.default_traveler_name, "You");
        assert_eq!(config.upcoming_trip_limit, 3);
        assert_eq!(config.store_latency(), Duration::ZERO);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "store_latency_ms: 250\nplaceholder_destination: Somewhere\n")
            .expect("Failed to write config");

        let config = PlannerConfig::load(Some(&path)).expect("Failed to load config");

        assert_eq!(config.store_latency(), Duration::from_millis(250));
        assert_eq!(config.placeholder_destination, "Somewhere");
        assert_eq!(config.default_traveler_name, "You");
        assert_eq!(config.seed_directory, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("absent.yaml");

        assert!(PlannerConfig::load(Some(&path)).is_err());
    }
}
