use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::package::TravelPackage;
use crate::pagination::Pagination;

/// Editorial category a destination is filed under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mountain,
    Beach,
    Historical,
    City,
    Trekking,
    Adventure,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mountain,
        Category::Beach,
        Category::Historical,
        Category::City,
        Category::Trekking,
        Category::Adventure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mountain => "Mountain",
            Category::Beach => "Beach",
            Category::Historical => "Historical",
            Category::City => "City",
            Category::Trekking => "Trekking",
            Category::Adventure => "Adventure",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::parse(value).unwrap_or(Category::Adventure)
    }
}

/// How demanding a trip is.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Difficulty::parse(value).unwrap_or(Difficulty::Moderate)
    }
}

/// Headline figures shown in the destination stats strip.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KeyStats {
    /// Duration text, e.g. "8 days / 7 nights".
    pub duration: String,
    pub difficulty: Difficulty,
    /// Age-group text, e.g. "12-45 years".
    pub age_group: String,
    /// Max-altitude text, e.g. "14,100 ft".
    pub max_altitude: String,
}

/// A named sight or activity at a destination.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Attraction {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

/// Departure-city card shown before the planner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DepartureCitySummary {
    pub id: i32,
    pub city: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub duration: String,
}

/// One line of the inclusions/exclusions list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InclusionItem {
    pub id: i32,
    pub label: String,
    /// `true` for "not included" lines.
    pub excluded: bool,
}

/// Domain representation of a sellable travel product, with its owned
/// children loaded.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Destination {
    /// Unique identifier of the destination.
    pub id: i32,
    /// Stable string identifier used in URLs.
    pub slug: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub category: Category,
    /// Starting price in the smallest currency unit.
    pub base_price_cents: i64,
    pub stats: KeyStats,
    pub long_description: String,
    /// Optional banner shown above the itinerary.
    pub important_update: Option<String>,
    pub image_url: Option<String>,
    /// Unpublished destinations are only visible in the admin console.
    pub is_published: bool,
    pub inclusions: Vec<InclusionItem>,
    pub attractions: Vec<Attraction>,
    pub departure_cities: Vec<DepartureCitySummary>,
    pub packages: Vec<TravelPackage>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Destination {
    /// Names of the departure cities in display order.
    pub fn city_names(&self) -> Vec<String> {
        self.departure_cities
            .iter()
            .map(|summary| summary.city.clone())
            .collect()
    }
}

/// Payload required to insert a new destination.
#[derive(Debug, Clone)]
pub struct NewDestination {
    pub slug: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub category: Category,
    pub base_price_cents: i64,
    pub stats: KeyStats,
    pub long_description: String,
    pub important_update: Option<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub updated_at: NaiveDateTime,
}

impl NewDestination {
    /// Build a new destination payload with the supplied essentials and the
    /// current timestamp.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        base_price_cents: i64,
        stats: KeyStats,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            subtitle: None,
            category,
            base_price_cents,
            stats,
            long_description: String::new(),
            important_update: None,
            image_url: None,
            is_published: false,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_long_description(mut self, description: impl Into<String>) -> Self {
        self.long_description = description.into();
        self
    }

    pub fn with_important_update(mut self, update: impl Into<String>) -> Self {
        self.important_update = Some(update.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }
}

/// Patch data applied when updating an existing destination.
#[derive(Debug, Clone)]
pub struct UpdateDestination {
    pub name: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub category: Option<Category>,
    pub base_price_cents: Option<i64>,
    pub stats: Option<KeyStats>,
    pub long_description: Option<String>,
    pub important_update: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub is_published: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateDestination {
    /// Create a new patch with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            subtitle: None,
            category: None,
            base_price_cents: None,
            stats: None,
            long_description: None,
            important_update: None,
            image_url: None,
            is_published: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the subtitle, using `None` to clear an existing value.
    pub fn subtitle(mut self, subtitle: Option<impl Into<String>>) -> Self {
        self.subtitle = Some(subtitle.map(Into::into));
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn base_price_cents(mut self, price: i64) -> Self {
        self.base_price_cents = Some(price);
        self
    }

    pub fn stats(mut self, stats: KeyStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn long_description(mut self, description: impl Into<String>) -> Self {
        self.long_description = Some(description.into());
        self
    }

    /// Update the banner text, using `None` to clear an existing value.
    pub fn important_update(mut self, update: Option<impl Into<String>>) -> Self {
        self.important_update = Some(update.map(Into::into));
        self
    }

    /// Update the hero image, using `None` to clear an existing value.
    pub fn image_url(mut self, url: Option<impl Into<String>>) -> Self {
        self.image_url = Some(url.map(Into::into));
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }
}

/// Payload for one attraction row when replacing a destination's list.
#[derive(Debug, Clone)]
pub struct NewAttraction {
    pub name: String,
    pub image_url: Option<String>,
}

/// Payload for one departure-city card when replacing a destination's list.
#[derive(Debug, Clone)]
pub struct NewDepartureCitySummary {
    pub city: String,
    pub image_url: Option<String>,
    pub price_cents: i64,
    pub duration: String,
}

/// Payload for one inclusions/exclusions line.
#[derive(Debug, Clone)]
pub struct NewInclusionItem {
    pub label: String,
    pub excluded: bool,
}

/// Query definition used to list destinations.
#[derive(Debug, Clone)]
pub struct DestinationListQuery {
    pub category: Option<Category>,
    /// Search term matched against the name and long description.
    pub search: Option<String>,
    /// Whether unpublished destinations should be included.
    pub include_unpublished: bool,
    pub pagination: Option<Pagination>,
}

impl Default for DestinationListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationListQuery {
    /// Construct a query that targets all published destinations.
    pub fn new() -> Self {
        Self {
            category: None,
            search: None,
            include_unpublished: false,
            pagination: None,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn include_unpublished(mut self) -> Self {
        self.include_unpublished = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
