use chrono::NaiveDate;
use shared::{CreateTripRequest, Trip};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripValidationError {
    #[error("Please enter a trip name")]
    EmptyName,
    #[error("End date must be after start date")]
    EndBeforeStart,
    #[error("Budget total cannot be negative")]
    NegativeBudget,
}

/// Check a trip request before anything is written
pub fn validate_create_trip(request: &CreateTripRequest) -> Result<(), TripValidationError> {
    validate_name_and_dates(&request.name, request.start_date, request.end_date)?;
    if request.budget_total < 0.0 || request.budget_total.is_nan() {
        return Err(TripValidationError::NegativeBudget);
    }
    Ok(())
}

/// Check a full replacement of an existing trip before it is written
pub fn validate_trip(trip: &Trip) -> Result<(), TripValidationError> {
    validate_name_and_dates(&trip.name, trip.start_date, trip.end_date)?;
    if trip.budget.total < 0.0 || trip.budget.total.is_nan() {
        return Err(TripValidationError::NegativeBudget);
    }
    Ok(())
}

fn validate_name_and_dates(
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), TripValidationError> {
    if name.trim().is_empty() {
        return Err(TripValidationError::EmptyName);
    }
    if start > end {
        return Err(TripValidationError::EndBeforeStart);
    }
    Ok(())
}

/// Trimmed, non-blank destinations, or the placeholder when none remain
pub fn normalize_destinations(destinations: &[String], placeholder: &str) -> Vec<String> {
    let cleaned: Vec<String> = destinations
        .iter()
        .map(|destination| destination.trim())
        .filter(|destination| !destination.is_empty())
        .map(str::to_string)
        .collect();

    if cleaned.is_empty() {
        vec![placeholder.to_string()]
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::{Budget, TripStatus};

    fn request(name: &str, start: (u32, u32), end: (u32, u32)) -> CreateTripRequest {
        CreateTripRequest {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, start.0, start.1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, end.0, end.1).unwrap(),
            destinations: Vec::new(),
            budget_total: 500.0,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(validate_create_trip(&request("Rome", (6, 1), (6, 5))), Ok(()));
        assert_eq!(validate_create_trip(&request("Day trip", (6, 1), (6, 1))), Ok(()));
    }

    #[test]
    fn test_invalid_requests() {
        assert_eq!(
            validate_create_trip(&request("   ", (6, 1), (6, 5))),
            Err(TripValidationError::EmptyName)
        );
        assert_eq!(
            validate_create_trip(&request("Rome", (6, 5), (6, 1))),
            Err(TripValidationError::EndBeforeStart)
        );

        let mut negative = request("Rome", (6, 1), (6, 5));
        negative.budget_total = -1.0;
        assert_eq!(validate_create_trip(&negative), Err(TripValidationError::NegativeBudget));
    }

    #[test]
    fn test_normalize_destinations() {
        assert_eq!(normalize_destinations(&[], "TBD"), vec!["TBD".to_string()]);
        assert_eq!(
            normalize_destinations(&[" ".to_string(), "".to_string()], "TBD"),
            vec!["TBD".to_string()]
        );
        assert_eq!(
            normalize_destinations(&[" Rome ".to_string(), "Florence".to_string()], "TBD"),
            vec!["Rome".to_string(), "Florence".to_string()]
        );
    }

    #[test]
    fn test_trip_replacement() {
        let mut trip = Trip {
            id: "trip::test".to_string(),
            name: "Rome".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            status: TripStatus::Upcoming,
            travelers: Vec::new(),
            destinations: Vec::new(),
            budget: Budget { total: 100.0, spent: 0.0 },
            image_url: None,
            created_at: Utc::now(),
        };
        assert_eq!(validate_trip(&trip), Ok(()));

        trip.start_date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(validate_trip(&trip), Err(TripValidationError::EndBeforeStart));

        trip.start_date = trip.end_date;
        trip.budget.total = -1.0;
        assert_eq!(validate_trip(&trip), Err(TripValidationError::NegativeBudget));
    }
}
