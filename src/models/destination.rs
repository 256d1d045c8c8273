use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::destination::{
    Attraction as DomainAttraction, DepartureCitySummary as DomainDepartureCitySummary,
    Destination as DomainDestination, InclusionItem as DomainInclusionItem, KeyStats,
    NewAttraction as DomainNewAttraction, NewDepartureCitySummary as DomainNewDepartureCitySummary,
    NewDestination as DomainNewDestination, NewInclusionItem as DomainNewInclusionItem,
    UpdateDestination as DomainUpdateDestination,
};
use crate::domain::package::TravelPackage as DomainTravelPackage;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct Destination {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub category: String,
    pub base_price_cents: i64,
    pub duration: String,
    pub difficulty: String,
    pub age_group: String,
    pub max_altitude: String,
    pub long_description: String,
    pub important_update: Option<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::attractions)]
#[diesel(belongs_to(Destination, foreign_key = destination_id))]
pub struct Attraction {
    pub id: i32,
    pub destination_id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::departure_cities)]
#[diesel(belongs_to(Destination, foreign_key = destination_id))]
pub struct DepartureCity {
    pub id: i32,
    pub destination_id: i32,
    pub city: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub duration: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::inclusion_items)]
#[diesel(belongs_to(Destination, foreign_key = destination_id))]
pub struct InclusionItem {
    pub id: i32,
    pub destination_id: i32,
    pub label: String,
    pub excluded: bool,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestination<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub subtitle: Option<&'a str>,
    pub category: &'a str,
    pub base_price_cents: i64,
    pub duration: &'a str,
    pub difficulty: &'a str,
    pub age_group: &'a str,
    pub max_altitude: &'a str,
    pub long_description: &'a str,
    pub important_update: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_published: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::destinations)]
pub struct UpdateDestination<'a> {
    pub name: Option<&'a str>,
    pub subtitle: Option<Option<&'a str>>,
    pub category: Option<&'a str>,
    pub base_price_cents: Option<i64>,
    pub duration: Option<&'a str>,
    pub difficulty: Option<&'a str>,
    pub age_group: Option<&'a str>,
    pub max_altitude: Option<&'a str>,
    pub long_description: Option<&'a str>,
    pub important_update: Option<Option<&'a str>>,
    pub image_url: Option<Option<&'a str>>,
    pub is_published: Option<bool>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::attractions)]
pub struct NewAttraction<'a> {
    pub destination_id: i32,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departure_cities)]
pub struct NewDepartureCity<'a> {
    pub destination_id: i32,
    pub city: &'a str,
    pub image_url: Option<&'a str>,
    pub price_cents: i64,
    pub duration: &'a str,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inclusion_items)]
pub struct NewInclusionItem<'a> {
    pub destination_id: i32,
    pub label: &'a str,
    pub excluded: bool,
    pub position: i32,
}

impl Destination {
    pub fn into_domain(
        self,
        inclusions: Vec<InclusionItem>,
        attractions: Vec<Attraction>,
        departure_cities: Vec<DepartureCity>,
        packages: Vec<DomainTravelPackage>,
    ) -> DomainDestination {
        DomainDestination {
            id: self.id,
            slug: self.slug,
            name: self.name,
            subtitle: self.subtitle,
            category: self.category.as_str().into(),
            base_price_cents: self.base_price_cents,
            stats: KeyStats {
                duration: self.duration,
                difficulty: self.difficulty.as_str().into(),
                age_group: self.age_group,
                max_altitude: self.max_altitude,
            },
            long_description: self.long_description,
            important_update: self.important_update,
            image_url: self.image_url,
            is_published: self.is_published,
            inclusions: inclusions.into_iter().map(Into::into).collect(),
            attractions: attractions.into_iter().map(Into::into).collect(),
            departure_cities: departure_cities.into_iter().map(Into::into).collect(),
            packages,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Attraction> for DomainAttraction {
    fn from(value: Attraction) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image_url: value.image_url,
        }
    }
}

impl From<DepartureCity> for DomainDepartureCitySummary {
    fn from(value: DepartureCity) -> Self {
        Self {
            id: value.id,
            city: value.city,
            image_url: value.image_url,
            price_cents: value.price_cents,
            duration: value.duration,
        }
    }
}

impl From<InclusionItem> for DomainInclusionItem {
    fn from(value: InclusionItem) -> Self {
        Self {
            id: value.id,
            label: value.label,
            excluded: value.excluded,
        }
    }
}

impl<'a> From<&'a DomainNewDestination> for NewDestination<'a> {
    fn from(value: &'a DomainNewDestination) -> Self {
        Self {
            slug: value.slug.as_str(),
            name: value.name.as_str(),
            subtitle: value.subtitle.as_deref(),
            category: value.category.as_str(),
            base_price_cents: value.base_price_cents,
            duration: value.stats.duration.as_str(),
            difficulty: value.stats.difficulty.as_str(),
            age_group: value.stats.age_group.as_str(),
            max_altitude: value.stats.max_altitude.as_str(),
            long_description: value.long_description.as_str(),
            important_update: value.important_update.as_deref(),
            image_url: value.image_url.as_deref(),
            is_published: value.is_published,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateDestination> for UpdateDestination<'a> {
    fn from(value: &'a DomainUpdateDestination) -> Self {
        Self {
            name: value.name.as_deref(),
            subtitle: value
                .subtitle
                .as_ref()
                .map(|subtitle| subtitle.as_deref()),
            category: value.category.map(|category| category.as_str()),
            base_price_cents: value.base_price_cents,
            duration: value.stats.as_ref().map(|stats| stats.duration.as_str()),
            difficulty: value.stats.as_ref().map(|stats| stats.difficulty.as_str()),
            age_group: value.stats.as_ref().map(|stats| stats.age_group.as_str()),
            max_altitude: value.stats.as_ref().map(|stats| stats.max_altitude.as_str()),
            long_description: value.long_description.as_deref(),
            important_update: value
                .important_update
                .as_ref()
                .map(|update| update.as_deref()),
            image_url: value.image_url.as_ref().map(|url| url.as_deref()),
            is_published: value.is_published,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewAttraction<'a> {
    pub fn from_domain(destination_id: i32, position: i32, value: &'a DomainNewAttraction) -> Self {
        Self {
            destination_id,
            name: value.name.as_str(),
            image_url: value.image_url.as_deref(),
            position,
        }
    }
}

impl<'a> NewDepartureCity<'a> {
    pub fn from_domain(
        destination_id: i32,
        position: i32,
        value: &'a DomainNewDepartureCitySummary,
    ) -> Self {
        Self {
            destination_id,
            city: value.city.as_str(),
            image_url: value.image_url.as_deref(),
            price_cents: value.price_cents,
            duration: value.duration.as_str(),
            position,
        }
    }
}

impl<'a> NewInclusionItem<'a> {
    pub fn from_domain(
        destination_id: i32,
        position: i32,
        value: &'a DomainNewInclusionItem,
    ) -> Self {
        Self {
            destination_id,
            label: value.label.as_str(),
            excluded: value.excluded,
            position,
        }
    }
}
