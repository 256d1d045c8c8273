use serde::{Deserialize, Serialize};

use crate::domain::availability::{
    AvailabilityIndex, SelectionStage, TripSelection, build_availability, format_display_date,
    matching_start, parse_start_date, project_date,
};
use crate::domain::destination::{Category, Destination, DestinationListQuery};
use crate::domain::package::TravelPackage;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::DestinationReader;
use crate::services::{ServiceError, ServiceResult};

/// Number of destinations featured on the landing page.
const FEATURED_COUNT: usize = 6;

/// Data required to render the landing page.
pub struct IndexPageData {
    pub featured: Vec<Destination>,
}

/// Loads the landing page.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: DestinationReader + ?Sized,
{
    let (_, featured) = repo
        .list_destinations(DestinationListQuery::new().paginate(1, FEATURED_COUNT))
        .map_err(ServiceError::from)?;

    Ok(IndexPageData { featured })
}

/// Query parameters accepted by the catalog page.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the catalog page.
pub struct DestinationsPageData {
    pub destinations: Paginated<Destination>,
    pub categories: Vec<&'static str>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Loads the destination catalog with optional category and search filters.
/// An unknown category filter is ignored rather than rejected.
pub fn load_destinations_page<R>(
    repo: &R,
    query: DestinationsQuery,
) -> ServiceResult<DestinationsPageData>
where
    R: DestinationReader + ?Sized,
{
    let DestinationsQuery {
        category,
        search,
        page,
    } = query;

    let page = page.unwrap_or(1);
    let parsed_category = category.as_deref().and_then(Category::parse);

    let mut list_query = DestinationListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(category) = parsed_category {
        list_query = list_query.category(category);
    }
    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_destinations(list_query).map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let destinations = Paginated::new(items, page, total_pages);

    Ok(DestinationsPageData {
        destinations,
        categories: Category::ALL.map(Category::as_str).to_vec(),
        category: parsed_category.map(|c| c.as_str().to_string()),
        search,
    })
}

/// Trip-planner query parameters accepted by the destination detail page.
#[derive(Debug, Default, Deserialize)]
pub struct TripQuery {
    pub city: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

/// Current planner selection as exposed to templates.
#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub city: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub stage: &'static str,
}

fn stage_name(stage: SelectionStage) -> &'static str {
    match stage {
        SelectionStage::NoCitySelected => "no_city_selected",
        SelectionStage::CitySelected => "city_selected",
        SelectionStage::MonthSelected => "month_selected",
        SelectionStage::DaySelected => "day_selected",
    }
}

/// The package resolved by the current selection, with projected itinerary
/// dates.
#[derive(Debug, Serialize)]
pub struct ResolvedPackageView {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    pub duration: String,
    pub departure_city: String,
    pub available_dates: Vec<String>,
    /// Label of the date-range matching the current selection, used by the
    /// registration link.
    pub selected_date: Option<String>,
    pub itinerary: Vec<ItineraryDayView>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryDayView {
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Display date such as "Fri, 26 Sep"; absent until a day is selected.
    pub display_date: Option<String>,
}

/// Data required to render the destination detail page.
pub struct DestinationPageData {
    pub destination: Destination,
    pub cities: Vec<String>,
    pub selection: SelectionView,
    pub availability: AvailabilityIndex,
    pub resolved: Option<ResolvedPackageView>,
}

/// Loads the destination detail page and reconciles the planner selection.
///
/// Query parameters are applied top-down (city, then month, then day) and
/// validated against the availability index as each level is applied; an
/// invalid or missing level falls back to the first available choice, the
/// same default the page lands on.
pub fn load_destination_page<R>(
    repo: &R,
    slug: &str,
    query: TripQuery,
) -> ServiceResult<DestinationPageData>
where
    R: DestinationReader + ?Sized,
{
    let destination = repo
        .get_destination_by_slug(slug)
        .map_err(ServiceError::from)?
        .filter(|destination| destination.is_published)
        .ok_or(ServiceError::NotFound)?;

    let mut cities = destination.city_names();
    for package in &destination.packages {
        if !cities.contains(&package.departure_city) {
            cities.push(package.departure_city.clone());
        }
    }

    let mut selection = TripSelection::new();
    let city = query
        .city
        .filter(|city| cities.contains(city))
        .or_else(|| cities.first().cloned());

    if let Some(city) = city {
        selection.select_city(&city);
        let index = build_availability(&destination.packages, &city);

        let month = query
            .month
            .filter(|month| index.has_month(month))
            .or_else(|| index.first_month().map(str::to_string));

        if let Some(month) = month {
            selection.select_month(&month);

            let day = query
                .day
                .filter(|day| index.has_day(&month, day))
                .or_else(|| index.first_day(&month).map(str::to_string));

            if let Some(day) = day {
                selection.select_day(&day);
            }
        }
    }

    let availability = selection
        .city()
        .map(|city| build_availability(&destination.packages, city))
        .unwrap_or_default();

    let resolved = selection
        .resolve(&destination.packages)
        .map(|package| resolved_view(package, &selection));

    let selection_view = SelectionView {
        city: selection.city().map(str::to_string),
        month: selection.month().map(str::to_string),
        day: selection.day().map(str::to_string),
        stage: stage_name(selection.stage()),
    };

    Ok(DestinationPageData {
        destination,
        cities,
        selection: selection_view,
        availability,
        resolved,
    })
}

fn resolved_view(package: &TravelPackage, selection: &TripSelection) -> ResolvedPackageView {
    let start = match (selection.month(), selection.day()) {
        (Some(month), Some(day)) => matching_start(package, month, day),
        _ => None,
    };

    let selected_date = start.as_ref().and_then(|start| {
        package
            .available_dates
            .iter()
            .find(|label| parse_start_date(label).is_some_and(|parsed| parsed == *start))
            .cloned()
    });

    let itinerary = package
        .itinerary
        .iter()
        .map(|day| {
            let display_date = match (&start, selection.month(), selection.day()) {
                (Some(start), Some(month), Some(selected_day)) => project_date(
                    month,
                    selected_day,
                    start.year,
                    day.day_number.max(1) as u32,
                )
                .map(format_display_date),
                _ => None,
            };
            ItineraryDayView {
                day_number: day.day_number,
                title: day.title.clone(),
                description: day.description.clone(),
                image_url: day.image_url.clone(),
                display_date,
            }
        })
        .collect();

    ResolvedPackageView {
        id: package.id,
        name: package.name.clone(),
        price_cents: package.price_cents,
        duration: package.duration.clone(),
        departure_city: package.departure_city.clone(),
        available_dates: package.available_dates.clone(),
        selected_date,
        itinerary,
    }
}

/// Availability index for one departure city, served as JSON to the planner
/// script. An unknown city yields an empty index, not an error.
pub fn availability_for_city<R>(
    repo: &R,
    slug: &str,
    city: &str,
) -> ServiceResult<AvailabilityIndex>
where
    R: DestinationReader + ?Sized,
{
    let destination = repo
        .get_destination_by_slug(slug)
        .map_err(ServiceError::from)?
        .filter(|destination| destination.is_published)
        .ok_or(ServiceError::NotFound)?;

    Ok(build_availability(&destination.packages, city))
}
