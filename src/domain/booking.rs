use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Gender recorded per participant.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        Gender::parse(value).unwrap_or(Gender::Other)
    }
}

/// One traveller on a booking.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// 10-digit mobile number.
    pub mobile: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// A confirmed trip registration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    /// Unique identifier of the booking.
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub package_id: i32,
    /// Date-range label chosen in the planner, copied verbatim.
    pub selected_date: String,
    pub participant_count: i32,
    pub participants: Vec<Participant>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for one traveller of a new booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewParticipant {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// Payload required to insert a new booking with its participants.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub destination_id: i32,
    pub package_id: i32,
    pub selected_date: String,
    pub participants: Vec<NewParticipant>,
    pub updated_at: NaiveDateTime,
}

impl NewBooking {
    /// Build a new booking payload with the supplied details and current
    /// timestamp.
    pub fn new(
        user_id: i32,
        destination_id: i32,
        package_id: i32,
        selected_date: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            destination_id,
            package_id,
            selected_date: selected_date.into(),
            participants: Vec::new(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn with_participants(mut self, participants: Vec<NewParticipant>) -> Self {
        self.participants = participants;
        self
    }
}

/// A booking joined with its account, destination and package names, as
/// shown in the profile and admin lists.
#[derive(Debug, Serialize, Clone)]
pub struct BookingWithUser {
    #[serde(flatten)]
    pub booking: Booking,
    pub user_name: String,
    pub user_email: String,
    pub destination_name: String,
    pub package_name: String,
}

/// Query definition used to list bookings.
#[derive(Debug, Clone)]
pub struct BookingListQuery {
    pub user_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl Default for BookingListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingListQuery {
    /// Construct a query that targets all bookings, newest first.
    pub fn new() -> Self {
        Self {
            user_id: None,
            destination_id: None,
            pagination: None,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn destination_id(mut self, destination_id: i32) -> Self {
        self.destination_id = Some(destination_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
