use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::package::{
    ItineraryDay as DomainItineraryDay, NewItineraryDay as DomainNewItineraryDay,
    NewTravelPackage as DomainNewTravelPackage, TravelPackage as DomainTravelPackage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::packages)]
pub struct Package {
    pub id: i32,
    pub destination_id: i32,
    pub name: String,
    pub price_cents: i64,
    pub duration: String,
    pub departure_city: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::package_dates)]
#[diesel(belongs_to(Package, foreign_key = package_id))]
pub struct PackageDate {
    pub id: i32,
    pub package_id: i32,
    pub label: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::itinerary_days)]
#[diesel(belongs_to(Package, foreign_key = package_id))]
pub struct ItineraryDay {
    pub id: i32,
    pub package_id: i32,
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::packages)]
pub struct NewPackage<'a> {
    pub destination_id: i32,
    pub name: &'a str,
    pub price_cents: i64,
    pub duration: &'a str,
    pub departure_city: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::package_dates)]
pub struct NewPackageDate<'a> {
    pub package_id: i32,
    pub label: &'a str,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::itinerary_days)]
pub struct NewItineraryDay<'a> {
    pub package_id: i32,
    pub day_number: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
}

impl Package {
    pub fn into_domain(
        self,
        dates: Vec<PackageDate>,
        itinerary: Vec<ItineraryDay>,
    ) -> DomainTravelPackage {
        DomainTravelPackage {
            id: self.id,
            destination_id: self.destination_id,
            name: self.name,
            price_cents: self.price_cents,
            duration: self.duration,
            departure_city: self.departure_city,
            available_dates: dates.into_iter().map(|date| date.label).collect(),
            itinerary: itinerary.into_iter().map(ItineraryDay::into_domain).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl ItineraryDay {
    pub fn into_domain(self) -> DomainItineraryDay {
        DomainItineraryDay {
            day_number: self.day_number,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl<'a> From<&'a DomainNewTravelPackage> for NewPackage<'a> {
    fn from(value: &'a DomainNewTravelPackage) -> Self {
        Self {
            destination_id: value.destination_id,
            name: value.name.as_str(),
            price_cents: value.price_cents,
            duration: value.duration.as_str(),
            departure_city: value.departure_city.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewPackageDate<'a> {
    pub fn from_label(package_id: i32, position: i32, label: &'a str) -> Self {
        Self {
            package_id,
            label,
            position,
        }
    }
}

impl<'a> NewItineraryDay<'a> {
    pub fn from_domain(package_id: i32, value: &'a DomainNewItineraryDay) -> Self {
        Self {
            package_id,
            day_number: value.day_number,
            title: value.title.as_str(),
            description: value.description.as_str(),
            image_url: value.image_url.as_deref(),
        }
    }
}
