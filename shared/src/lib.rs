use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Trip ID in format: "trip::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    /// First day of the trip (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    pub status: TripStatus,
    #[serde(default)]
    pub travelers: Vec<Traveler>,
    /// Never empty once created; creation substitutes a placeholder
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a trip. Only `Upcoming` is produced on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Active,
    Completed,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatus::Upcoming => write!(f, "upcoming"),
            TripStatus::Active => write!(f, "active"),
            TripStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    /// Planned budget, never negative
    #[serde(default)]
    pub total: f64,
    /// Advisory only. Actual spend is recomputed from activities.
    #[serde(default)]
    pub spent: f64,
}

/// Activity ID in format: "activity::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Location,
    /// 24-hour `HH:MM`, used for same-day ordering
    #[serde(default)]
    pub time: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub category: ActivityCategory,
    /// Day the activity is scheduled for; kept in sync with its itinerary
    pub date: NaiveDate,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// A named place. Zero coordinates mean "unset".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "lat")]
    pub latitude: f64,
    #[serde(default, rename = "lng")]
    pub longitude: f64,
}

impl Location {
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// Activity category. Unrecognized values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityCategory {
    #[default]
    Sightseeing,
    Food,
    Transport,
    Accommodation,
    Other(String),
}

impl ActivityCategory {
    /// The four categories the budget breakdown reports on, in display order
    pub const KNOWN: [ActivityCategory; 4] = [
        ActivityCategory::Sightseeing,
        ActivityCategory::Food,
        ActivityCategory::Transport,
        ActivityCategory::Accommodation,
    ];

    /// Display label; anything unrecognized renders as "other"
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Sightseeing => "sightseeing",
            ActivityCategory::Food => "food",
            ActivityCategory::Transport => "transport",
            ActivityCategory::Accommodation => "accommodation",
            ActivityCategory::Other(_) => "other",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityCategory::Other(_))
    }
}

impl From<String> for ActivityCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sightseeing" => ActivityCategory::Sightseeing,
            "food" => ActivityCategory::Food,
            "transport" => ActivityCategory::Transport,
            "accommodation" => ActivityCategory::Accommodation,
            _ => ActivityCategory::Other(value),
        }
    }
}

impl From<&str> for ActivityCategory {
    fn from(value: &str) -> Self {
        ActivityCategory::from(value.to_string())
    }
}

impl From<ActivityCategory> for String {
    fn from(category: ActivityCategory) -> Self {
        match category {
            ActivityCategory::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Itinerary ID in format: "itinerary::<uuid>"
///
/// Join record binding activities to one day of one trip. At most one
/// itinerary exists per `(trip_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub trip_id: String,
    pub date: NaiveDate,
    /// Activity IDs in binding order. Duplicates are allowed.
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Trip {
    pub fn generate_id() -> String {
        format!("trip::{}", Uuid::new_v4().simple())
    }
}

impl Activity {
    pub fn generate_id() -> String {
        format!("activity::{}", Uuid::new_v4().simple())
    }
}

impl Itinerary {
    pub fn generate_id() -> String {
        format!("itinerary::{}", Uuid::new_v4().simple())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub budget_total: f64,
    /// Falls back to the configured default cover image
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub name: String,
    pub location: Location,
    pub time: String,
    pub duration: i64,
    pub cost: f64,
    pub category: ActivityCategory,
}

impl CreateActivityRequest {
    /// A request pre-filled with the add-activity form defaults
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: Location::default(),
            time: "09:00".to_string(),
            duration: 60,
            cost: 0.0,
            category: ActivityCategory::Sightseeing,
        }
    }
}

/// Result of adding an activity to a trip day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBinding {
    pub activity: Activity,
    pub itinerary: Itinerary,
}

/// One day of a trip with its activities in time order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Category label, "other" for the unrecognized bucket
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub total_budget: f64,
    pub total_spent: f64,
    /// May go negative when the trip is over budget
    pub remaining: f64,
    pub categories: Vec<CategorySpend>,
}

/// Dashboard summary of a single trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripOverview {
    pub trip: Trip,
    pub duration_days: i64,
    pub day_count: usize,
    pub destination_count: usize,
    pub activity_count: usize,
    pub progress_percent: u8,
    pub budget: BudgetBreakdown,
}
