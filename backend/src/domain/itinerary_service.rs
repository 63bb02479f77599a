//! Itinerary binding and day resolution.
//!
//! An itinerary is the join record tying activities to one calendar day of
//! one trip. This service is the only writer of itineraries and keeps at
//! most one per `(trip, day)` by updating the existing record when there is
//! one. The read side (`activities_for_day`, `activities_for_trip`,
//! `day_plans`) is recomputed from fresh store snapshots on every call.
//!
//! ## Known hazards
//!
//! - Adding an activity is two writes to two stores (activity, then
//!   itinerary). If the second fails, the activity is left orphaned. This is
//!   accepted; resolvers skip references they cannot resolve.
//! - Two concurrent bindings to the same empty day can both miss the lookup
//!   and create two itineraries for that day. Nothing coordinates callers.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{Activity, ActivityBinding, CreateActivityRequest, DayPlan, Itinerary, Trip};
use std::collections::{HashMap, HashSet};

use crate::domain::calendar::TripCalendarService;
use crate::domain::models::validate_create_activity;
use crate::storage::{ActivityDraft, Connection, ItineraryDraft, ItineraryPatch, RecordStorage};

/// Service for binding activities to trip days and resolving day views
#[derive(Clone)]
pub struct ItineraryService<C: Connection> {
    itineraries: C::ItineraryStore,
    activities: C::ActivityStore,
    calendar_service: TripCalendarService,
}

impl<C: Connection> ItineraryService<C> {
    pub fn new(connection: &C, calendar_service: TripCalendarService) -> Self {
        Self {
            itineraries: connection.itineraries(),
            activities: connection.activities(),
            calendar_service,
        }
    }

    /// The itinerary for `(trip_id, date)`, if one exists
    pub async fn find_itinerary(&self, trip_id: &str, date: NaiveDate) -> Result<Option<Itinerary>> {
        let itineraries = self.itineraries.get_all().await?;
        Ok(find_in_snapshot(&itineraries, trip_id, date).cloned())
    }

    /// All itineraries belonging to a trip, in store order
    pub async fn itineraries_for_trip(&self, trip_id: &str) -> Result<Vec<Itinerary>> {
        let itineraries = self.itineraries.get_all().await?;
        Ok(itineraries
            .into_iter()
            .filter(|itinerary| itinerary.trip_id == trip_id)
            .collect())
    }

    /// Bind an already-stored activity to one day of a trip
    ///
    /// Appends to the day's existing itinerary, or creates one holding just
    /// this activity. Binding the same activity twice records it twice.
    /// Performs exactly one itinerary write and no validation.
    pub async fn bind_activity(&self, trip: &Trip, date: NaiveDate, activity: &Activity) -> Result<Itinerary> {
        info!("Binding activity {} to trip {} on {}", activity.id, trip.id, date);

        if activity.date != date {
            warn!(
                "Activity {} is dated {} but is being bound to {}",
                activity.id, activity.date, date
            );
        }

        match self.find_itinerary(&trip.id, date).await? {
            Some(existing) => {
                let mut activity_ids = existing.activities;
                activity_ids.push(activity.id.clone());

                let patch = ItineraryPatch {
                    activities: Some(activity_ids),
                    ..Default::default()
                };
                let updated = self
                    .itineraries
                    .update(&existing.id, patch)
                    .await
                    .with_context(|| {
                        format!("Failed to bind activity {} to itinerary {}", activity.id, existing.id)
                    })?;

                info!(
                    "Itinerary {} for {} now holds {} activities",
                    updated.id,
                    date,
                    updated.activities.len()
                );
                Ok(updated)
            }
            None => {
                let draft = ItineraryDraft {
                    trip_id: trip.id.clone(),
                    date,
                    activities: vec![activity.id.clone()],
                    notes: String::new(),
                };
                let created = self
                    .itineraries
                    .create(draft)
                    .await
                    .with_context(|| format!("Failed to create itinerary for {} on {}", trip.id, date))?;

                info!("Created itinerary {} for trip {} on {}", created.id, trip.id, date);
                Ok(created)
            }
        }
    }

    /// Create an activity on a trip day and bind it, as one operation
    ///
    /// Validation happens first and aborts with no writes. After that the
    /// activity is stored and then bound; if binding fails the activity
    /// stays in the store unbound and the error is returned.
    pub async fn add_activity_to_day(
        &self,
        trip: &Trip,
        date: NaiveDate,
        request: CreateActivityRequest,
    ) -> Result<ActivityBinding> {
        info!("Adding activity '{}' to trip {} on {}", request.name, trip.id, date);

        validate_create_activity(trip, date, &request)?;

        let draft = ActivityDraft {
            name: request.name.trim().to_string(),
            location: request.location,
            time: request.time,
            duration: u32::try_from(request.duration).context("Activity duration out of range")?,
            cost: request.cost,
            category: request.category,
            date,
        };
        let activity = self
            .activities
            .create(draft)
            .await
            .context("Failed to store activity")?;

        match self.bind_activity(trip, date, &activity).await {
            Ok(itinerary) => Ok(ActivityBinding { activity, itinerary }),
            Err(e) => {
                warn!(
                    "Activity {} was stored but could not be bound to {}: {}",
                    activity.id, date, e
                );
                Err(e)
            }
        }
    }

    /// Activities bound to one day of a trip, ordered by time of day
    ///
    /// A day with no itinerary yields an empty list.
    pub async fn activities_for_day(&self, trip: &Trip, date: NaiveDate) -> Result<Vec<Activity>> {
        let itineraries = self.itineraries.get_all().await?;
        let Some(itinerary) = find_in_snapshot(&itineraries, &trip.id, date) else {
            debug!("No itinerary for trip {} on {}", trip.id, date);
            return Ok(Vec::new());
        };

        let activities = self.activities.get_all().await?;
        Ok(resolve_day_activities(itinerary, &activities))
    }

    /// Every stored activity referenced by any of the trip's itineraries
    ///
    /// Each activity appears once, in activity-store order.
    pub async fn activities_for_trip(&self, trip: &Trip) -> Result<Vec<Activity>> {
        let itineraries = self.itineraries.get_all().await?;
        let activities = self.activities.get_all().await?;
        Ok(resolve_trip_activities(&trip.id, &itineraries, &activities))
    }

    /// One plan per calendar day of the trip, each with its ordered activities
    pub async fn day_plans(&self, trip: &Trip) -> Result<Vec<DayPlan>> {
        let itineraries = self.itineraries.get_all().await?;
        let activities = self.activities.get_all().await?;

        let plans = self
            .calendar_service
            .days_of(trip)
            .into_iter()
            .map(|date| DayPlan {
                date,
                activities: find_in_snapshot(&itineraries, &trip.id, date)
                    .map(|itinerary| resolve_day_activities(itinerary, &activities))
                    .unwrap_or_default(),
            })
            .collect();

        Ok(plans)
    }
}

/// First itinerary in `itineraries` for `(trip_id, date)`
pub fn find_in_snapshot<'a>(
    itineraries: &'a [Itinerary],
    trip_id: &str,
    date: NaiveDate,
) -> Option<&'a Itinerary> {
    itineraries
        .iter()
        .find(|itinerary| itinerary.trip_id == trip_id && itinerary.date == date)
}

/// Resolve an itinerary's references against an activity snapshot
///
/// References with no matching activity are dropped. The result is sorted
/// by `HH:MM` time; equal times keep the itinerary's reference order.
pub fn resolve_day_activities(itinerary: &Itinerary, activities: &[Activity]) -> Vec<Activity> {
    let mut by_id: HashMap<&str, &Activity> = HashMap::with_capacity(activities.len());
    for activity in activities {
        by_id.entry(activity.id.as_str()).or_insert(activity);
    }

    let mut resolved: Vec<Activity> = itinerary
        .activities
        .iter()
        .filter_map(|activity_id| match by_id.get(activity_id.as_str()) {
            Some(activity) => Some((*activity).clone()),
            None => {
                debug!("Itinerary {} references missing activity {}", itinerary.id, activity_id);
                None
            }
        })
        .collect();

    resolved.sort_by(|a, b| a.time.cmp(&b.time));
    resolved
}

/// Activities referenced by any itinerary of `trip_id`, once each, in snapshot order
pub fn resolve_trip_activities(
    trip_id: &str,
    itineraries: &[Itinerary],
    activities: &[Activity],
) -> Vec<Activity> {
    let referenced: HashSet<&str> = itineraries
        .iter()
        .filter(|itinerary| itinerary.trip_id == trip_id)
        .flat_map(|itinerary| itinerary.activities.iter().map(String::as_str))
        .collect();

    activities
        .iter()
        .filter(|activity| referenced.contains(activity.id.as_str()))
        .cloned()
        .collect()
}
