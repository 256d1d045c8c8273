use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Departure cities the agency currently operates from.
pub const DEPARTURE_CITIES: [&str; 4] = ["Ahmedabad", "Kochi", "Mumbai", "Baroda/Surat"];

/// One entry of a package's day-by-day plan.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    /// 1-based day number within the trip.
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// One bookable variant of a destination: a departure city, price and
/// itinerary with its available travel windows.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TravelPackage {
    /// Unique identifier of the package.
    pub id: i32,
    /// Owning destination identifier.
    pub destination_id: i32,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price_cents: i64,
    /// Duration text, e.g. "7 days / 6 nights".
    pub duration: String,
    pub departure_city: String,
    /// Date-range labels, e.g. `"Sep 26 - Oct 3, 2025"`, in display order.
    pub available_dates: Vec<String>,
    /// Day-by-day plan ordered by day number.
    pub itinerary: Vec<ItineraryDay>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Errors raised when an itinerary violates the day-numbering invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("itinerary must start at day 1, found day {0}")]
    WrongFirstDay(i32),
    #[error("itinerary day numbers must be contiguous: expected day {expected}, found day {found}")]
    NotContiguous { expected: i32, found: i32 },
}

/// Check that day numbers are contiguous starting at 1 and strictly
/// increasing. An empty itinerary is allowed while a package is drafted.
pub fn validate_itinerary(days: &[NewItineraryDay]) -> Result<(), ItineraryError> {
    for (index, day) in days.iter().enumerate() {
        let expected = index as i32 + 1;
        if day.day_number != expected {
            return Err(if index == 0 {
                ItineraryError::WrongFirstDay(day.day_number)
            } else {
                ItineraryError::NotContiguous {
                    expected,
                    found: day.day_number,
                }
            });
        }
    }
    Ok(())
}

/// Payload for one itinerary row of a new package.
#[derive(Debug, Clone)]
pub struct NewItineraryDay {
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Payload required to insert a new package with its dates and itinerary.
#[derive(Debug, Clone)]
pub struct NewTravelPackage {
    pub destination_id: i32,
    pub name: String,
    pub price_cents: i64,
    pub duration: String,
    pub departure_city: String,
    pub available_dates: Vec<String>,
    pub itinerary: Vec<NewItineraryDay>,
    pub updated_at: NaiveDateTime,
}

impl NewTravelPackage {
    /// Build a new package payload with the supplied details and current
    /// timestamp.
    pub fn new(
        destination_id: i32,
        name: impl Into<String>,
        price_cents: i64,
        duration: impl Into<String>,
        departure_city: impl Into<String>,
    ) -> Self {
        Self {
            destination_id,
            name: name.into(),
            price_cents,
            duration: duration.into(),
            departure_city: departure_city.into(),
            available_dates: Vec::new(),
            itinerary: Vec::new(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn with_dates(mut self, dates: Vec<String>) -> Self {
        self.available_dates = dates;
        self
    }

    pub fn with_itinerary(mut self, itinerary: Vec<NewItineraryDay>) -> Self {
        self.itinerary = itinerary;
        self
    }
}
