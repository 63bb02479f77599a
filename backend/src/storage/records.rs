//! Store-side shapes of the planner entities: the drafts passed to
//! `create` and the patches passed to `update`.

use chrono::{DateTime, NaiveDate, Utc};
use shared::{Activity, ActivityCategory, Budget, Itinerary, Location, Traveler, Trip, TripStatus};

use super::traits::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub travelers: Vec<Traveler>,
    pub destinations: Vec<String>,
    pub budget: Budget,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<TripStatus>,
    pub travelers: Option<Vec<Traveler>>,
    pub destinations: Option<Vec<String>>,
    pub budget: Option<Budget>,
    pub image_url: Option<Option<String>>,
}

impl From<Trip> for TripPatch {
    /// Full replacement of every mutable field
    fn from(trip: Trip) -> Self {
        TripPatch {
            name: Some(trip.name),
            start_date: Some(trip.start_date),
            end_date: Some(trip.end_date),
            status: Some(trip.status),
            travelers: Some(trip.travelers),
            destinations: Some(trip.destinations),
            budget: Some(trip.budget),
            image_url: Some(trip.image_url),
        }
    }
}

impl Record for Trip {
    type Draft = TripDraft;
    type Patch = TripPatch;

    const KIND: &'static str = "Trip";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn generate_id() -> String {
        Trip::generate_id()
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: TripDraft) -> Self {
        Trip {
            id,
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            travelers: draft.travelers,
            destinations: draft.destinations,
            budget: draft.budget,
            image_url: draft.image_url,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TripPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(travelers) = patch.travelers {
            self.travelers = travelers;
        }
        if let Some(destinations) = patch.destinations {
            self.destinations = destinations;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub name: String,
    pub location: Location,
    pub time: String,
    pub duration: u32,
    pub cost: f64,
    pub category: ActivityCategory,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityPatch {
    pub name: Option<String>,
    pub location: Option<Location>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub cost: Option<f64>,
    pub category: Option<ActivityCategory>,
    pub date: Option<NaiveDate>,
}

impl Record for Activity {
    type Draft = ActivityDraft;
    type Patch = ActivityPatch;

    const KIND: &'static str = "Activity";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn generate_id() -> String {
        Activity::generate_id()
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: ActivityDraft) -> Self {
        Activity {
            id,
            name: draft.name,
            location: draft.location,
            time: draft.time,
            duration: draft.duration,
            cost: draft.cost,
            category: draft.category,
            date: draft.date,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ActivityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDraft {
    pub trip_id: String,
    pub date: NaiveDate,
    pub activities: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItineraryPatch {
    pub trip_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub activities: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl Record for Itinerary {
    type Draft = ItineraryDraft;
    type Patch = ItineraryPatch;

    const KIND: &'static str = "Itinerary";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn generate_id() -> String {
        Itinerary::generate_id()
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: ItineraryDraft) -> Self {
        Itinerary {
            id,
            trip_id: draft.trip_id,
            date: draft.date,
            activities: draft.activities,
            notes: draft.notes,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ItineraryPatch) {
        if let Some(trip_id) = patch.trip_id {
            self.trip_id = trip_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(activities) = patch.activities {
            self.activities = activities;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
