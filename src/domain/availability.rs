//! Derivation pipeline behind the destination trip planner.
//!
//! Raw package data is turned into an availability index (which months and
//! days a departure city serves), the index plus a completed selection is
//! resolved back to a single package, and the resolved departure date is
//! projected onto every itinerary day. All functions here are pure; malformed
//! editorial data degrades to "nothing resolved yet" rather than an error.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::package::TravelPackage;

/// Month abbreviations used by date-range labels, paired with the full names
/// shown in the planner, in calendar order.
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Full month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS
        .get(month.checked_sub(1)? as usize)
        .map(|(_, name)| *name)
}

/// 1-based month number for a full month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|(_, full)| *full == name)
        .map(|index| index as u32 + 1)
}

fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|(short, _)| *short == abbrev)
        .map(|index| index as u32 + 1)
}

/// Parsed start of a date-range label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartDate {
    /// 1-based calendar month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Day-number substring exactly as written in the label.
    pub day_label: String,
    /// Year stated after the label's comma.
    pub year: i32,
}

impl StartDate {
    /// Full name of the start month.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or_default()
    }

    /// The start as a calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Parse the start of a date-range label such as `"Sep 26 - Oct 3, 2025"`.
///
/// Only the text before the first `" - "` plus the trailing year are
/// consumed; the end half of the range never is. Returns `None` for any
/// label that does not match the format or does not name a real calendar
/// date — callers drop such labels instead of erroring.
pub fn parse_start_date(label: &str) -> Option<StartDate> {
    let (start, rest) = label.split_once(" - ")?;
    let year: i32 = rest.rsplit_once(", ")?.1.trim().parse().ok()?;

    let mut tokens = start.split_whitespace();
    let month = month_from_abbrev(tokens.next()?)?;
    let day_label = tokens.next()?.to_string();
    if tokens.next().is_some() {
        return None;
    }
    let day: u32 = day_label.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?;

    Some(StartDate {
        month,
        day,
        day_label,
        year,
    })
}

/// Derived availability for one departure city.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityIndex {
    /// Month names with at least one departure, in calendar order.
    pub months: Vec<String>,
    /// Day-number labels per month, in the order first encountered.
    pub days_by_month: HashMap<String, Vec<String>>,
}

impl AvailabilityIndex {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Day labels available in `month`.
    pub fn days(&self, month: &str) -> &[String] {
        self.days_by_month
            .get(month)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_month(&self, month: &str) -> bool {
        self.months.iter().any(|name| name == month)
    }

    pub fn has_day(&self, month: &str, day: &str) -> bool {
        self.days(month).iter().any(|label| label == day)
    }

    pub fn first_month(&self) -> Option<&str> {
        self.months.first().map(String::as_str)
    }

    pub fn first_day(&self, month: &str) -> Option<&str> {
        self.days(month).first().map(String::as_str)
    }
}

/// Build the availability index for `city` over the destination's packages.
///
/// Date-range labels are deduplicated before parsing; labels that fail to
/// parse are silently dropped. A city with no packages yields an empty index.
pub fn build_availability(packages: &[TravelPackage], city: &str) -> AvailabilityIndex {
    let mut seen: Vec<&str> = Vec::new();
    let mut starts: Vec<StartDate> = Vec::new();

    for package in packages.iter().filter(|p| p.departure_city == city) {
        for label in &package.available_dates {
            if seen.contains(&label.as_str()) {
                continue;
            }
            seen.push(label);
            if let Some(start) = parse_start_date(label) {
                starts.push(start);
            }
        }
    }

    let mut index = AvailabilityIndex::default();
    for month in 1..=12 {
        let days: Vec<String> = starts
            .iter()
            .filter(|start| start.month == month)
            .map(|start| start.day_label.clone())
            .collect();
        if let Some(name) = month_name(month)
            && !days.is_empty()
        {
            index.months.push(name.to_string());
            index.days_by_month.insert(name.to_string(), days);
        }
    }
    index
}

/// Find the package serving `city` with a departure starting on
/// (`month`, `day`).
///
/// When several packages qualify, the first in list order wins. That
/// tie-break is deliberate: the catalog has always resolved overlapping
/// departures this way and existing bookings rely on it staying stable.
pub fn resolve_package<'a>(
    packages: &'a [TravelPackage],
    city: &str,
    month: &str,
    day: &str,
) -> Option<&'a TravelPackage> {
    packages.iter().find(|package| {
        package.departure_city == city
            && matching_start(package, month, day).is_some()
    })
}

/// Start token of the first date-range in `package` departing on
/// (`month`, `day`).
pub fn matching_start(package: &TravelPackage, month: &str, day: &str) -> Option<StartDate> {
    package
        .available_dates
        .iter()
        .filter_map(|label| parse_start_date(label))
        .find(|start| start.month_name() == month && start.day_label == day)
}

/// Calendar date displayed for itinerary day `day_offset` (1-based) of a
/// trip departing on (`month`, `day`) of `year`.
///
/// Returns `None` when the selection is incomplete or does not name a real
/// date; the caller renders no date rather than failing.
pub fn project_date(month: &str, day: &str, year: i32, day_offset: u32) -> Option<NaiveDate> {
    if day_offset == 0 {
        return None;
    }
    let month = month_number(month)?;
    let day: u32 = day.trim().parse().ok()?;
    let base = NaiveDate::from_ymd_opt(year, month, day)?;
    base.checked_add_days(Days::new(u64::from(day_offset - 1)))
}

/// Display form used by the itinerary, e.g. `"Fri, 26 Sep"`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b").to_string()
}

/// How far through the city → month → day selection the visitor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    NoCitySelected,
    CitySelected,
    MonthSelected,
    DaySelected,
}

/// Current trip-planner selection for one destination view.
///
/// Downstream choices are discarded whenever an upstream one changes, so the
/// selection can never point at a month or day the current city does not
/// offer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TripSelection {
    city: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl TripSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection preloaded with the first city on offer and its first
    /// available month and day. Purely a usability default; an empty
    /// selection is just as valid.
    pub fn auto_select(packages: &[TravelPackage], cities: &[String]) -> Self {
        let mut selection = Self::new();
        let Some(city) = cities.first() else {
            return selection;
        };
        selection.select_city(city);

        let index = build_availability(packages, city);
        if let Some(month) = index.first_month().map(str::to_string) {
            selection.select_month(&month);
            if let Some(day) = index.first_day(&month).map(str::to_string) {
                selection.select_day(&day);
            }
        }
        selection
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    pub fn stage(&self) -> SelectionStage {
        match (&self.city, &self.month, &self.day) {
            (None, ..) => SelectionStage::NoCitySelected,
            (Some(_), None, _) => SelectionStage::CitySelected,
            (Some(_), Some(_), None) => SelectionStage::MonthSelected,
            (Some(_), Some(_), Some(_)) => SelectionStage::DaySelected,
        }
    }

    /// Choose a departure city. Changing city discards month and day.
    pub fn select_city(&mut self, city: &str) {
        if self.city.as_deref() != Some(city) {
            self.month = None;
            self.day = None;
        }
        self.city = Some(city.to_string());
    }

    /// Choose a month. Ignored until a city is selected; changing month
    /// discards the day.
    pub fn select_month(&mut self, month: &str) {
        if self.city.is_none() {
            return;
        }
        if self.month.as_deref() != Some(month) {
            self.day = None;
        }
        self.month = Some(month.to_string());
    }

    /// Choose a day of month. Ignored until a month is selected.
    pub fn select_day(&mut self, day: &str) {
        if self.month.is_none() {
            return;
        }
        self.day = Some(day.to_string());
    }

    /// Package matching the completed selection, if any.
    pub fn resolve<'a>(&self, packages: &'a [TravelPackage]) -> Option<&'a TravelPackage> {
        resolve_package(
            packages,
            self.city.as_deref()?,
            self.month.as_deref()?,
            self.day.as_deref()?,
        )
    }
}
