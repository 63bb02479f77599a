//! # Seed Data
//!
//! Loads the initial store contents from a directory of JSON files:
//!
//! ```text
//! seed/
//! ├── trips.json        ← array of trips
//! ├── itineraries.json  ← array of itineraries
//! └── activities.json   ← array of activities
//! ```
//!
//! Any of the files may be absent, which leaves that store empty. Seeding
//! happens once at startup; nothing is ever written back.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use shared::{Activity, Itinerary, Trip};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::normalize_destinations;

pub const TRIPS_FILE: &str = "trips.json";
pub const ITINERARIES_FILE: &str = "itineraries.json";
pub const ACTIVITIES_FILE: &str = "activities.json";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything loaded from a seed directory
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub trips: Vec<Trip>,
    pub itineraries: Vec<Itinerary>,
    pub activities: Vec<Activity>,
}

impl SeedData {
    /// Load all seed files from `directory`
    pub fn load(directory: &Path) -> Result<Self, SeedError> {
        if !directory.is_dir() {
            return Err(SeedError::MissingDirectory(directory.to_path_buf()));
        }

        let seed = SeedData {
            trips: load_file(&directory.join(TRIPS_FILE))?,
            itineraries: load_file(&directory.join(ITINERARIES_FILE))?,
            activities: load_file(&directory.join(ACTIVITIES_FILE))?,
        };

        info!(
            "Loaded seed data from {}: {} trips, {} itineraries, {} activities",
            directory.display(),
            seed.trips.len(),
            seed.itineraries.len(),
            seed.activities.len()
        );
        Ok(seed)
    }

    /// Give every seeded trip a non-empty, trimmed destination list
    pub fn normalize_destinations(&mut self, placeholder: &str) {
        for trip in &mut self.trips {
            let destinations = normalize_destinations(&trip.destinations, placeholder);
            if destinations != trip.destinations {
                warn!("Seeded trip {} had blank destinations, normalized", trip.id);
                trip.destinations = destinations;
            }
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    if !path.exists() {
        debug!("No seed file at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
