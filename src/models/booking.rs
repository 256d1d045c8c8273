use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::booking::{
    Booking as DomainBooking, NewBooking as DomainNewBooking,
    NewParticipant as DomainNewParticipant, Participant as DomainParticipant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub package_id: i32,
    pub selected_date: String,
    pub participant_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::participants)]
#[diesel(belongs_to(Booking, foreign_key = booking_id))]
pub struct Participant {
    pub id: i32,
    pub booking_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking<'a> {
    pub user_id: i32,
    pub destination_id: i32,
    pub package_id: i32,
    pub selected_date: &'a str,
    pub participant_count: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::participants)]
pub struct NewParticipant<'a> {
    pub booking_id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub mobile: &'a str,
    pub birth_date: NaiveDate,
    pub gender: &'a str,
}

impl Booking {
    pub fn into_domain(self, participants: Vec<Participant>) -> DomainBooking {
        DomainBooking {
            id: self.id,
            user_id: self.user_id,
            destination_id: self.destination_id,
            package_id: self.package_id,
            selected_date: self.selected_date,
            participant_count: self.participant_count,
            participants: participants
                .into_iter()
                .map(Participant::into_domain)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Participant {
    pub fn into_domain(self) -> DomainParticipant {
        DomainParticipant {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            mobile: self.mobile,
            birth_date: self.birth_date,
            gender: self.gender.as_str().into(),
        }
    }
}

impl<'a> From<&'a DomainNewBooking> for NewBooking<'a> {
    fn from(value: &'a DomainNewBooking) -> Self {
        Self {
            user_id: value.user_id,
            destination_id: value.destination_id,
            package_id: value.package_id,
            selected_date: value.selected_date.as_str(),
            participant_count: value.participants.len() as i32,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewParticipant<'a> {
    pub fn from_domain(booking_id: i32, value: &'a DomainNewParticipant) -> Self {
        Self {
            booking_id,
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            mobile: value.mobile.as_str(),
            birth_date: value.birth_date,
            gender: value.gender.as_str(),
        }
    }
}
