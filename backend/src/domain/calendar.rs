//! Trip calendar domain logic.
//!
//! Enumerates the calendar days of a trip and maps "now" onto the trip's
//! date range. Everything here works on calendar dates rather than fixed
//! 24-hour steps, so daylight-saving transitions never skip or repeat a day.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use shared::Trip;

/// Calendar service for trip date ranges
#[derive(Clone, Default)]
pub struct TripCalendarService;

impl TripCalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Every calendar day from start to end, inclusive and ascending
    ///
    /// A trip whose start is after its end yields no days.
    pub fn days_of(&self, trip: &Trip) -> Vec<NaiveDate> {
        let days: Vec<NaiveDate> = trip
            .start_date
            .iter_days()
            .take_while(|day| *day <= trip.end_date)
            .collect();

        debug!("Trip {} spans {} days", trip.id, days.len());
        days
    }

    /// Whole days between start and end (a three-day trip reports 2)
    pub fn duration_days(&self, trip: &Trip) -> i64 {
        (trip.end_date - trip.start_date).num_days().max(0)
    }

    /// Whether `date` falls within the trip, inclusive on both ends
    pub fn contains(&self, trip: &Trip, date: NaiveDate) -> bool {
        trip.start_date <= date && date <= trip.end_date
    }

    /// Percentage of the trip elapsed at `now`, 0 to 100
    ///
    /// Start and end are taken at midnight, so `now` on the end date at
    /// midnight is 100 and anything later on that day is past the end.
    pub fn progress_percent(&self, trip: &Trip, now: NaiveDateTime) -> u8 {
        let start = trip.start_date.and_time(chrono::NaiveTime::MIN);
        let end = trip.end_date.and_time(chrono::NaiveTime::MIN);

        if now < start {
            return 0;
        }
        if now > end {
            return 100;
        }

        let total = (end - start).num_milliseconds();
        if total <= 0 {
            // Zero-length trip and `now` sits exactly on it
            return 100;
        }

        let elapsed = (now - start).num_milliseconds();
        let percent = (100.0 * elapsed as f64 / total as f64).round();
        percent.clamp(0.0, 100.0) as u8
    }

    /// Progress at midnight on `today`
    pub fn progress_percent_on(&self, trip: &Trip, today: NaiveDate) -> u8 {
        self.progress_percent(trip, today.and_time(chrono::NaiveTime::MIN))
    }
}
