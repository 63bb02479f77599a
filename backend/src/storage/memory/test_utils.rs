//! Test utilities for consistent, isolated test infrastructure
//!
//! Every `TestEnvironment` owns its own zero-latency stores, so tests never
//! see each other's records.

use chrono::NaiveDate;
use shared::{Activity, ActivityCategory, CreateTripRequest, Location, Trip};

use super::connection::MemoryConnection;
use crate::config::PlannerConfig;
use crate::storage::records::ActivityDraft;
use crate::storage::traits::{Connection, RecordStorage};
use crate::Backend;

pub struct TestEnvironment {
    pub connection: MemoryConnection,
    pub backend: Backend<MemoryConnection>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(&PlannerConfig::default())
    }

    pub fn with_config(config: &PlannerConfig) -> Self {
        let connection = MemoryConnection::new_for_testing();
        let backend = Backend::with_connection(connection.clone(), config);
        Self { connection, backend }
    }

    /// Create a valid trip with a 1000 budget
    pub async fn create_trip(&self, name: &str, start: NaiveDate, end: NaiveDate) -> Trip {
        self.backend
            .trip_service
            .create_trip(CreateTripRequest {
                name: name.to_string(),
                start_date: start,
                end_date: end,
                destinations: vec![name.to_string()],
                budget_total: 1000.0,
                image_url: None,
            })
            .await
            .expect("Failed to create test trip")
    }

    /// Store an activity directly, without binding it to any itinerary
    pub async fn store_activity(&self, name: &str, time: &str, date: NaiveDate) -> Activity {
        self.connection
            .activities()
            .create(ActivityDraft {
                name: name.to_string(),
                location: Location::default(),
                time: time.to_string(),
                duration: 60,
                cost: 0.0,
                category: ActivityCategory::Sightseeing,
                date,
            })
            .await
            .expect("Failed to store test activity")
    }
}
