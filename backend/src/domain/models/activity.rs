use chrono::{NaiveDate, NaiveTime};
use shared::{CreateActivityRequest, Trip};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActivityValidationError {
    #[error("Please enter an activity name")]
    EmptyName,
    #[error("Time must be HH:MM in 24-hour format, got '{0}'")]
    InvalidTime(String),
    #[error("Duration cannot be negative")]
    NegativeDuration,
    #[error("Duration is too large")]
    DurationTooLarge,
    #[error("Cost cannot be negative")]
    NegativeCost,
    #[error("{date} is outside the trip ({start} to {end})")]
    DateOutsideTrip {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Check an activity request against the trip day it is being added to
pub fn validate_create_activity(
    trip: &Trip,
    date: NaiveDate,
    request: &CreateActivityRequest,
) -> Result<(), ActivityValidationError> {
    if request.name.trim().is_empty() {
        return Err(ActivityValidationError::EmptyName);
    }
    if !is_valid_time(&request.time) {
        return Err(ActivityValidationError::InvalidTime(request.time.clone()));
    }
    if request.duration < 0 {
        return Err(ActivityValidationError::NegativeDuration);
    }
    if u32::try_from(request.duration).is_err() {
        return Err(ActivityValidationError::DurationTooLarge);
    }
    if request.cost < 0.0 || request.cost.is_nan() {
        return Err(ActivityValidationError::NegativeCost);
    }
    if date < trip.start_date || date > trip.end_date {
        return Err(ActivityValidationError::DateOutsideTrip {
            date,
            start: trip.start_date,
            end: trip.end_date,
        });
    }
    Ok(())
}

/// Fixed-width `HH:MM`; the width is what makes string order chronological
pub fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
        && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}
