//! Trip service domain logic.
//!
//! Handles trip creation and whole-record replacement. Creation is where
//! the trip-level rules are enforced: a non-blank name, a start date no
//! later than the end date, a non-negative budget and a destination list
//! that is never empty. Trips are never deleted here.

use anyhow::{Context, Result};
use log::{info, warn};
use shared::{Budget, CreateTripRequest, Traveler, Trip, TripStatus};

use crate::config::PlannerConfig;
use crate::domain::models::{normalize_destinations, validate_create_trip, validate_trip};
use crate::storage::{Connection, RecordStorage, TripDraft, TripPatch};

/// Traveler ID given to the default traveler on new trips
pub const DEFAULT_TRAVELER_ID: &str = "1";

/// Service for creating, replacing and listing trips
#[derive(Clone)]
pub struct TripService<C: Connection> {
    trips: C::TripStore,
    placeholder_destination: String,
    default_traveler_name: String,
    default_cover_image: Option<String>,
    upcoming_trip_limit: usize,
}

impl<C: Connection> TripService<C> {
    pub fn new(connection: &C, config: &PlannerConfig) -> Self {
        Self {
            trips: connection.trips(),
            placeholder_destination: config.placeholder_destination.clone(),
            default_traveler_name: config.default_traveler_name.clone(),
            default_cover_image: config.default_cover_image.clone(),
            upcoming_trip_limit: config.upcoming_trip_limit,
        }
    }

    /// Validate and store a new upcoming trip
    pub async fn create_trip(&self, request: CreateTripRequest) -> Result<Trip> {
        info!("Creating trip: {:?}", request);

        validate_create_trip(&request)?;

        let draft = TripDraft {
            name: request.name.trim().to_string(),
            start_date: request.start_date,
            end_date: request.end_date,
            status: TripStatus::Upcoming,
            travelers: vec![Traveler {
                id: DEFAULT_TRAVELER_ID.to_string(),
                name: self.default_traveler_name.clone(),
            }],
            destinations: normalize_destinations(&request.destinations, &self.placeholder_destination),
            budget: Budget {
                total: request.budget_total,
                spent: 0.0,
            },
            image_url: request.image_url.or_else(|| self.default_cover_image.clone()),
        };

        let trip = self.trips.create(draft).await.context("Failed to store trip")?;

        info!("Created trip '{}' with ID: {}", trip.name, trip.id);
        Ok(trip)
    }

    /// Replace every mutable field of an existing trip
    ///
    /// The replacement is held to the creation rules: a blank destination
    /// list falls back to the placeholder and reversed dates are rejected.
    pub async fn update_trip(&self, mut trip: Trip) -> Result<Trip> {
        info!("Updating trip: {}", trip.id);

        validate_trip(&trip)?;

        trip.name = trip.name.trim().to_string();
        trip.destinations = normalize_destinations(&trip.destinations, &self.placeholder_destination);

        let id = trip.id.clone();
        let updated = self
            .trips
            .update(&id, TripPatch::from(trip))
            .await
            .with_context(|| format!("Failed to update trip {}", id))?;

        Ok(updated)
    }

    pub async fn get_trip(&self, trip_id: &str) -> Result<Option<Trip>> {
        let trip = self.trips.get_by_id(trip_id).await?;
        if trip.is_none() {
            warn!("Trip not found: {}", trip_id);
        }
        Ok(trip)
    }

    /// All trips, newest first
    pub async fn list_trips(&self) -> Result<Vec<Trip>> {
        let trips = self.trips.get_all().await?;
        info!("Found {} trips", trips.len());
        Ok(trips)
    }

    /// The first few trips that have not started yet, in store order
    pub async fn upcoming_trips(&self) -> Result<Vec<Trip>> {
        let trips = self.trips.get_all().await?;
        Ok(trips
            .into_iter()
            .filter(|trip| trip.status == TripStatus::Upcoming)
            .take(self.upcoming_trip_limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TripValidationError;
    use crate::storage::memory::test_utils::TestEnvironment;
    use crate::storage::{is_not_found, MemoryConnection};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn request(name: &str) -> CreateTripRequest {
        CreateTripRequest {
            name: name.to_string(),
            start_date: day(1),
            end_date: day(7),
            destinations: Vec::new(),
            budget_total: 1200.0,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_trip_defaults() {
        let env = TestEnvironment::new();

        let trip = env
            .backend
            .trip_service
            .create_trip(request("  Iceland Ring Road "))
            .await
            .expect("Failed to create trip");

        assert_eq!(trip.name, "Iceland Ring Road");
        assert_eq!(trip.status, TripStatus::Upcoming);
        assert_eq!(trip.destinations, vec!["TBD".to_string()]);
        assert_eq!(
            trip.travelers,
            vec![Traveler { id: "1".to_string(), name: "You".to_string() }]
        );
        assert_eq!(trip.budget, Budget { total: 1200.0, spent: 0.0 });
        assert!(trip.id.starts_with("trip::"));
    }

    #[tokio::test]
    async fn test_create_trip_uses_config() {
        let config = PlannerConfig {
            placeholder_destination: "Somewhere".to_string(),
            default_cover_image: Some("default.jpg".to_string()),
            ..PlannerConfig::default()
        };
        let service = TripService::new(&MemoryConnection::new_for_testing(), &config);

        let trip = service.create_trip(request("Road trip")).await.expect("Failed to create trip");
        assert_eq!(trip.destinations, vec!["Somewhere".to_string()]);
        assert_eq!(trip.image_url.as_deref(), Some("default.jpg"));

        let mut with_image = request("Beach");
        with_image.image_url = Some("beach.jpg".to_string());
        with_image.destinations = vec!["Nice".to_string()];
        let trip = service.create_trip(with_image).await.expect("Failed to create trip");
        assert_eq!(trip.image_url.as_deref(), Some("beach.jpg"));
        assert_eq!(trip.destinations, vec!["Nice".to_string()]);
    }

    #[tokio::test]
    async fn test_create_trip_validation_writes_nothing() {
        let env = TestEnvironment::new();
        let service = &env.backend.trip_service;

        let err = service.create_trip(request("")).await.unwrap_err();
        assert_eq!(err.downcast_ref::<TripValidationError>(), Some(&TripValidationError::EmptyName));

        let mut reversed = request("Backwards");
        reversed.start_date = day(9);
        let err = service.create_trip(reversed).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<TripValidationError>(),
            Some(&TripValidationError::EndBeforeStart)
        );

        assert!(env.connection.trips().is_empty());
    }

    #[tokio::test]
    async fn test_update_trip_replaces_record() {
        let env = TestEnvironment::new();
        let service = &env.backend.trip_service;
        let mut trip = service.create_trip(request("Alps")).await.expect("Failed to create trip");

        trip.name = "Alps in winter".to_string();
        trip.status = TripStatus::Active;
        trip.destinations = vec!["Zermatt".to_string(), "Chamonix".to_string()];
        let updated = service.update_trip(trip.clone()).await.expect("Failed to update trip");

        assert_eq!(updated, trip);
        let stored = service.get_trip(&trip.id).await.expect("Failed to get trip");
        assert_eq!(stored, Some(trip));
    }

    #[tokio::test]
    async fn test_update_trip_keeps_destinations_non_empty() {
        let env = TestEnvironment::new();
        let service = &env.backend.trip_service;
        let mut trip = env.create_trip("Alps", day(1), day(3)).await;

        trip.destinations = vec!["  ".to_string()];
        let updated = service.update_trip(trip.clone()).await.expect("Failed to update trip");
        assert_eq!(updated.destinations, vec!["TBD".to_string()]);

        trip.destinations.clear();
        let updated = service.update_trip(trip).await.expect("Failed to update trip");
        assert_eq!(updated.destinations, vec!["TBD".to_string()]);
    }

    #[tokio::test]
    async fn test_update_trip_rejects_reversed_dates() {
        let env = TestEnvironment::new();
        let service = &env.backend.trip_service;
        let original = env.create_trip("Alps", day(1), day(3)).await;

        let mut reversed = original.clone();
        reversed.start_date = day(5);
        reversed.end_date = day(1);
        let err = service.update_trip(reversed).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<TripValidationError>(),
            Some(&TripValidationError::EndBeforeStart)
        );

        let stored = service.get_trip(&original.id).await.expect("Failed to get trip");
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn test_update_missing_trip_is_not_found() {
        let env = TestEnvironment::new();
        let mut trip = env.create_trip("Alps", day(1), day(3)).await;
        env.connection.trips().delete(&trip.id).await.expect("Failed to delete");

        trip.name = "Ghost".to_string();
        let err = env.backend.trip_service.update_trip(trip).await.unwrap_err();
        assert!(is_not_found(&err));
    }

    #[tokio::test]
    async fn test_upcoming_trips_filters_and_limits() {
        let env = TestEnvironment::new();
        let service = &env.backend.trip_service;

        for name in ["One", "Two", "Three", "Four"] {
            service.create_trip(request(name)).await.expect("Failed to create trip");
        }
        let mut started = service.create_trip(request("Started")).await.expect("Failed to create trip");
        started.status = TripStatus::Active;
        service.update_trip(started).await.expect("Failed to update trip");

        let upcoming = service.upcoming_trips().await.expect("Failed to list upcoming");
        let names: Vec<&str> = upcoming.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Four", "Three", "Two"]);

        assert_eq!(service.list_trips().await.expect("Failed to list").len(), 5);
    }
}
