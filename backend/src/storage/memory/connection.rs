use anyhow::{Context, Result};
use log::info;
use shared::{Activity, Itinerary, Trip};
use std::time::Duration;

use super::record_store::MemoryRecordStore;
use super::seed::SeedData;
use crate::config::PlannerConfig;
use crate::storage::traits::Connection;

/// MemoryConnection owns the three in-memory stores
///
/// Cloning a connection is cheap and every clone sees the same data.
#[derive(Clone)]
pub struct MemoryConnection {
    trips: MemoryRecordStore<Trip>,
    itineraries: MemoryRecordStore<Itinerary>,
    activities: MemoryRecordStore<Activity>,
}

impl MemoryConnection {
    /// Create a connection with empty stores
    pub fn new(latency: Duration) -> Self {
        Self::from_seed(SeedData::default(), latency)
    }

    /// Create a connection pre-filled with seed data
    pub fn from_seed(seed: SeedData, latency: Duration) -> Self {
        Self {
            trips: MemoryRecordStore::with_records(seed.trips, latency),
            itineraries: MemoryRecordStore::with_records(seed.itineraries, latency),
            activities: MemoryRecordStore::with_records(seed.activities, latency),
        }
    }

    /// Build the connection described by `config`, loading seed files if configured
    pub fn seeded(config: &PlannerConfig) -> Result<Self> {
        let mut seed = match &config.seed_directory {
            Some(directory) => SeedData::load(directory)
                .with_context(|| format!("Failed to seed stores from {}", directory.display()))?,
            None => {
                info!("No seed directory configured, starting with empty stores");
                SeedData::default()
            }
        };
        seed.normalize_destinations(&config.placeholder_destination);

        Ok(Self::from_seed(seed, config.store_latency()))
    }

    /// Create a zero-latency connection with empty stores for testing
    pub fn new_for_testing() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Connection for MemoryConnection {
    type TripStore = MemoryRecordStore<Trip>;
    type ItineraryStore = MemoryRecordStore<Itinerary>;
    type ActivityStore = MemoryRecordStore<Activity>;

    fn trips(&self) -> Self::TripStore {
        self.trips.clone()
    }

    fn itineraries(&self) -> Self::ItineraryStore {
        self.itineraries.clone()
    }

    fn activities(&self) -> Self::ActivityStore {
        self.activities.clone()
    }
}
