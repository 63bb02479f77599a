//! Validation rules for the planner entities. These run in the services
//! before any store write; the binder itself never re-validates.

pub mod activity;
pub mod trip;

pub use activity::{is_valid_time, validate_create_activity, ActivityValidationError};
pub use trip::{normalize_destinations, validate_create_trip, validate_trip, TripValidationError};
