//! Trip overview: the dashboard numbers for one trip, derived on demand
//! from the current store contents.

use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;
use log::debug;
use shared::TripOverview;

use crate::domain::{BudgetService, ItineraryService, TripCalendarService, TripService};
use crate::storage::{Connection, StoreError};

#[derive(Clone)]
pub struct TripOverviewService<C: Connection> {
    trip_service: TripService<C>,
    itinerary_service: ItineraryService<C>,
    calendar_service: TripCalendarService,
    budget_service: BudgetService,
}

impl<C: Connection> TripOverviewService<C> {
    pub fn new(
        trip_service: TripService<C>,
        itinerary_service: ItineraryService<C>,
        calendar_service: TripCalendarService,
        budget_service: BudgetService,
    ) -> Self {
        Self {
            trip_service,
            itinerary_service,
            calendar_service,
            budget_service,
        }
    }

    /// Overview of a trip as of `now`
    pub async fn overview(&self, trip_id: &str, now: NaiveDateTime) -> Result<TripOverview> {
        let trip = self
            .trip_service
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| anyhow!(StoreError::not_found("Trip", trip_id)))?;

        let activities = self.itinerary_service.activities_for_trip(&trip).await?;
        let budget = self.budget_service.breakdown(&trip, &activities);

        let overview = TripOverview {
            duration_days: self.calendar_service.duration_days(&trip),
            day_count: self.calendar_service.days_of(&trip).len(),
            destination_count: trip.destinations.len(),
            activity_count: activities.len(),
            progress_percent: self.calendar_service.progress_percent(&trip, now),
            budget,
            trip,
        };

        debug!(
            "Overview for {}: {} activities, {}% complete",
            trip_id, overview.activity_count, overview.progress_percent
        );
        Ok(overview)
    }
}
