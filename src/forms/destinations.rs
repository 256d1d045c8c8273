use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::availability::parse_start_date;
use crate::domain::destination::{
    Category, Difficulty, KeyStats, NewAttraction, NewDepartureCitySummary, NewDestination,
    NewInclusionItem, UpdateDestination,
};
use crate::domain::package::{
    DEPARTURE_CITIES, ItineraryError, NewItineraryDay, NewTravelPackage, validate_itinerary,
};
use crate::routes::empty_string_as_none;

/// Maximum allowed length for names and slugs.
const NAME_MAX_LEN: u64 = 128;
const SLUG_MAX_LEN: u64 = 64;

/// Errors that can occur while processing the destination form.
#[derive(Debug, Error)]
pub enum DestinationFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("slug may only contain lowercase letters, digits and dashes")]
    InvalidSlug,
    #[error("unknown category `{value}`")]
    UnknownCategory { value: String },
    #[error("unknown difficulty `{value}`")]
    UnknownDifficulty { value: String },
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    #[error("attraction line `{line}` must look like `Name | image-url`")]
    InvalidAttraction { line: String },
    #[error("departure city line `{line}` must look like `City | price | duration | image-url`")]
    InvalidDepartureCity { line: String },
}

/// Form payload shared by the add and edit destination pages.
#[derive(Debug, Deserialize, Validate)]
pub struct DestinationForm {
    #[validate(length(min = 1, max = SLUG_MAX_LEN))]
    pub slug: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub subtitle: Option<String>,
    pub category: String,
    /// Base price in rupees, optionally with paise after a decimal point.
    pub base_price: String,
    #[validate(length(min = 1))]
    pub duration: String,
    pub difficulty: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub max_altitude: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub important_update: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub image_url: Option<String>,
    /// Checkbox; present only when ticked.
    #[serde(default)]
    pub is_published: Option<String>,
    /// One inclusion per line.
    #[serde(default)]
    pub inclusions: String,
    /// One exclusion per line.
    #[serde(default)]
    pub exclusions: String,
    /// One `Name | image-url` attraction per line.
    #[serde(default)]
    pub attractions: String,
    /// One `City | price | duration | image-url` card per line.
    #[serde(default)]
    pub departure_cities: String,
}

/// Canonical payloads produced from a validated [`DestinationForm`].
pub struct DestinationParts {
    pub destination: NewDestination,
    pub inclusions: Vec<NewInclusionItem>,
    pub attractions: Vec<NewAttraction>,
    pub departure_cities: Vec<NewDepartureCitySummary>,
}

/// Like [`DestinationParts`] but carrying a patch instead of an insert.
pub struct DestinationUpdateParts {
    pub update: UpdateDestination,
    pub inclusions: Vec<NewInclusionItem>,
    pub attractions: Vec<NewAttraction>,
    pub departure_cities: Vec<NewDepartureCitySummary>,
}

impl DestinationForm {
    pub fn published(&self) -> bool {
        self.is_published.is_some()
    }

    fn stats(&self) -> Result<KeyStats, DestinationFormError> {
        let difficulty = Difficulty::parse(self.difficulty.trim()).ok_or_else(|| {
            DestinationFormError::UnknownDifficulty {
                value: self.difficulty.clone(),
            }
        })?;
        Ok(KeyStats {
            duration: self.duration.trim().to_string(),
            difficulty,
            age_group: self.age_group.trim().to_string(),
            max_altitude: self.max_altitude.trim().to_string(),
        })
    }

    fn category(&self) -> Result<Category, DestinationFormError> {
        Category::parse(self.category.trim()).ok_or_else(|| DestinationFormError::UnknownCategory {
            value: self.category.clone(),
        })
    }

    fn children(
        &self,
    ) -> Result<
        (
            Vec<NewInclusionItem>,
            Vec<NewAttraction>,
            Vec<NewDepartureCitySummary>,
        ),
        DestinationFormError,
    > {
        let mut inclusions: Vec<NewInclusionItem> = non_empty_lines(&self.inclusions)
            .map(|label| NewInclusionItem {
                label: label.to_string(),
                excluded: false,
            })
            .collect();
        inclusions.extend(non_empty_lines(&self.exclusions).map(|label| NewInclusionItem {
            label: label.to_string(),
            excluded: true,
        }));

        let attractions = non_empty_lines(&self.attractions)
            .map(parse_attraction_line)
            .collect::<Result<Vec<_>, _>>()?;

        let departure_cities = non_empty_lines(&self.departure_cities)
            .map(parse_departure_city_line)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((inclusions, attractions, departure_cities))
    }

    /// Validate and convert into insert payloads.
    pub fn into_parts(self) -> Result<DestinationParts, DestinationFormError> {
        self.validate()?;

        let slug = self.slug.trim().to_string();
        if !is_valid_slug(&slug) {
            return Err(DestinationFormError::InvalidSlug);
        }

        let category = self.category()?;
        let stats = self.stats()?;
        let base_price_cents =
            parse_price_cents(&self.base_price).ok_or_else(|| DestinationFormError::InvalidPrice {
                value: self.base_price.clone(),
            })?;
        let (inclusions, attractions, departure_cities) = self.children()?;

        let mut destination =
            NewDestination::new(slug, self.name.trim(), category, base_price_cents, stats)
                .with_long_description(self.long_description.trim());
        if let Some(subtitle) = &self.subtitle {
            destination = destination.with_subtitle(subtitle.trim());
        }
        if let Some(update) = &self.important_update {
            destination = destination.with_important_update(update.trim());
        }
        if let Some(url) = &self.image_url {
            destination = destination.with_image_url(url.trim());
        }
        if self.published() {
            destination = destination.published();
        }

        Ok(DestinationParts {
            destination,
            inclusions,
            attractions,
            departure_cities,
        })
    }

    /// Validate and convert into a full-field patch plus replacement lists.
    pub fn into_update_parts(self) -> Result<DestinationUpdateParts, DestinationFormError> {
        self.validate()?;

        let category = self.category()?;
        let stats = self.stats()?;
        let base_price_cents =
            parse_price_cents(&self.base_price).ok_or_else(|| DestinationFormError::InvalidPrice {
                value: self.base_price.clone(),
            })?;
        let (inclusions, attractions, departure_cities) = self.children()?;

        let update = UpdateDestination::new()
            .name(self.name.trim())
            .subtitle(self.subtitle.as_deref().map(str::trim))
            .category(category)
            .base_price_cents(base_price_cents)
            .stats(stats)
            .long_description(self.long_description.trim())
            .important_update(self.important_update.as_deref().map(str::trim))
            .image_url(self.image_url.as_deref().map(str::trim))
            .published(self.is_published.is_some());

        Ok(DestinationUpdateParts {
            update,
            inclusions,
            attractions,
            departure_cities,
        })
    }
}

/// Errors that can occur while processing the add-package form.
#[derive(Debug, Error)]
pub enum PackageFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("unknown departure city `{value}`")]
    UnknownDepartureCity { value: String },
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    #[error("date label `{line}` must look like `Sep 26 - Oct 3, 2025`")]
    InvalidDateLabel { line: String },
    #[error("itinerary line `{line}` must look like `1. Title | Description | image-url`")]
    InvalidItineraryLine { line: String },
    #[error(transparent)]
    Itinerary(#[from] ItineraryError),
}

/// Form payload emitted by the add-package section of the admin console.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPackageForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Price in rupees, optionally with paise after a decimal point.
    pub price: String,
    #[validate(length(min = 1))]
    pub duration: String,
    pub departure_city: String,
    /// One date-range label per line.
    #[serde(default)]
    pub available_dates: String,
    /// One `N. Title | Description | image-url` itinerary row per line.
    #[serde(default)]
    pub itinerary: String,
}

impl AddPackageForm {
    /// Validate and convert into an insert payload for `destination_id`.
    pub fn into_new_package(
        self,
        destination_id: i32,
    ) -> Result<NewTravelPackage, PackageFormError> {
        self.validate()?;

        let departure_city = self.departure_city.trim();
        if !DEPARTURE_CITIES.contains(&departure_city) {
            return Err(PackageFormError::UnknownDepartureCity {
                value: departure_city.to_string(),
            });
        }

        let price_cents =
            parse_price_cents(&self.price).ok_or_else(|| PackageFormError::InvalidPrice {
                value: self.price.clone(),
            })?;

        let dates: Vec<String> = non_empty_lines(&self.available_dates)
            .map(|line| {
                parse_start_date(line)
                    .map(|_| line.to_string())
                    .ok_or_else(|| PackageFormError::InvalidDateLabel {
                        line: line.to_string(),
                    })
            })
            .collect::<Result<_, _>>()?;

        let itinerary: Vec<NewItineraryDay> = non_empty_lines(&self.itinerary)
            .map(parse_itinerary_line)
            .collect::<Result<_, _>>()?;
        validate_itinerary(&itinerary)?;

        Ok(NewTravelPackage::new(
            destination_id,
            self.name.trim(),
            price_cents,
            self.duration.trim(),
            departure_city,
        )
        .with_dates(dates)
        .with_itinerary(itinerary))
    }
}

/// Errors that can occur while parsing an uploaded legacy-content file.
#[derive(Debug, Error)]
pub enum ImportFormError {
    #[error("error reading uploaded file")]
    FileReadError,
    #[error("error parsing uploaded JSON: {0}")]
    JsonParseError(String),
}

impl From<std::io::Error> for ImportFormError {
    fn from(_: std::io::Error) -> Self {
        ImportFormError::FileReadError
    }
}

#[derive(MultipartForm)]
/// Multipart form for the one-time legacy content import.
pub struct ImportDestinationsForm {
    #[multipart(limit = "10MB")]
    /// Uploaded JSON array of legacy destination documents.
    pub json: TempFile,
}

impl ImportDestinationsForm {
    /// Parse the uploaded file into legacy destination documents.
    pub fn parse(&mut self) -> Result<Vec<LegacyDestination>, ImportFormError> {
        self.json.file.rewind()?;
        parse_legacy_destinations(self.json.file.by_ref())
    }
}

#[derive(MultipartForm)]
/// Multipart form for uploading a destination hero image.
pub struct UploadHeroImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
}

/// Destination document as exported from the legacy content store. The old
/// fixtures drifted across revisions, so several fields accept aliases and
/// default when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDestination {
    /// Legacy identifier, reused as the slug.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub category: String,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub key_stats: Option<LegacyKeyStats>,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub important_update: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub attractions: Vec<LegacyAttraction>,
    #[serde(default)]
    pub departure_cities: Vec<LegacyDepartureCity>,
    #[serde(default)]
    pub packages: Vec<LegacyPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyKeyStats {
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub max_altitude: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAttraction {
    pub name: String,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDepartureCity {
    #[serde(alias = "name")]
    pub city: String,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPackage {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    pub departure_city: String,
    #[serde(default)]
    pub available_dates: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<LegacyItineraryDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyItineraryDay {
    #[serde(alias = "dayNumber")]
    pub day: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

/// Parse a JSON array of legacy destination documents.
pub fn parse_legacy_destinations<R: Read>(
    reader: R,
) -> Result<Vec<LegacyDestination>, ImportFormError> {
    serde_json::from_reader(reader).map_err(|e| ImportFormError::JsonParseError(e.to_string()))
}

/// Convert a whole-rupee (optionally `.paise`) price string to cents.
fn parse_price_cents(value: &str) -> Option<i64> {
    let value = value.trim().replace(',', "");
    let (rupees, paise) = match value.split_once('.') {
        None => (value.as_str(), "0"),
        Some((rupees, paise)) => (rupees, paise),
    };
    if paise.is_empty() || paise.len() > 2 || !paise.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let rupees: i64 = rupees.parse().ok()?;
    if rupees < 0 {
        return None;
    }
    let mut fraction: i64 = paise.parse().ok()?;
    if paise.len() == 1 {
        fraction *= 10;
    }
    Some(rupees * 100 + fraction)
}

/// Convert a legacy floating-point rupee price to cents.
pub(crate) fn legacy_price_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_attraction_line(line: &str) -> Result<NewAttraction, DestinationFormError> {
    let mut segments = line.split('|').map(str::trim);
    let name = segments.next().unwrap_or_default();
    if name.is_empty() {
        return Err(DestinationFormError::InvalidAttraction {
            line: line.to_string(),
        });
    }
    let image_url = segments.next().filter(|url| !url.is_empty());
    Ok(NewAttraction {
        name: name.to_string(),
        image_url: image_url.map(str::to_string),
    })
}

fn parse_departure_city_line(line: &str) -> Result<NewDepartureCitySummary, DestinationFormError> {
    let error = || DestinationFormError::InvalidDepartureCity {
        line: line.to_string(),
    };

    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    if segments.len() < 3 {
        return Err(error());
    }
    let city = segments[0];
    if city.is_empty() {
        return Err(error());
    }
    let price_cents = parse_price_cents(segments[1]).ok_or_else(error)?;
    let duration = segments[2];
    if duration.is_empty() {
        return Err(error());
    }
    let image_url = segments.get(3).filter(|url| !url.is_empty());

    Ok(NewDepartureCitySummary {
        city: city.to_string(),
        image_url: image_url.map(|url| url.to_string()),
        price_cents,
        duration: duration.to_string(),
    })
}

fn parse_itinerary_line(line: &str) -> Result<NewItineraryDay, PackageFormError> {
    let error = || PackageFormError::InvalidItineraryLine {
        line: line.to_string(),
    };

    let (number, rest) = line.split_once('.').ok_or_else(error)?;
    let day_number: i32 = number.trim().parse().map_err(|_| error())?;

    let mut segments = rest.split('|').map(str::trim);
    let title = segments.next().unwrap_or_default();
    if title.is_empty() {
        return Err(error());
    }
    let description = segments.next().unwrap_or_default();
    let image_url = segments.next().filter(|url| !url.is_empty());

    Ok(NewItineraryDay {
        day_number,
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn base_form() -> DestinationForm {
        DestinationForm {
            slug: "manali".to_string(),
            name: "Manali".to_string(),
            subtitle: Some("Himalayan resort town".to_string()),
            category: "Mountain".to_string(),
            base_price: "15500".to_string(),
            duration: "8 days / 7 nights".to_string(),
            difficulty: "Moderate".to_string(),
            age_group: "12-45 years".to_string(),
            max_altitude: "14,100 ft".to_string(),
            long_description: "Nestled in the mountains...".to_string(),
            important_update: None,
            image_url: None,
            is_published: Some("on".to_string()),
            inclusions: "Accommodation\nMeals\n".to_string(),
            exclusions: "Flights\n".to_string(),
            attractions: "Solang Valley | https://img/solang.jpg\nHadimba Temple\n".to_string(),
            departure_cities: "Mumbai | 15500 | 7 days | https://img/mum.jpg\nAhmedabad | 13500 | 8 days\n"
                .to_string(),
        }
    }

    #[test]
    fn destination_form_builds_canonical_parts() {
        let parts = base_form().into_parts().expect("form should convert");

        assert_eq!(parts.destination.slug, "manali");
        assert_eq!(parts.destination.base_price_cents, 1_550_000);
        assert!(parts.destination.is_published);
        assert_eq!(parts.inclusions.len(), 3);
        assert!(parts.inclusions[2].excluded);
        assert_eq!(parts.attractions.len(), 2);
        assert_eq!(parts.attractions[1].image_url, None);
        assert_eq!(parts.departure_cities.len(), 2);
        assert_eq!(parts.departure_cities[0].price_cents, 1_550_000);
    }

    #[test]
    fn destination_form_rejects_bad_slug_category_and_price() {
        let mut form = base_form();
        form.slug = "Manali Hills".to_string();
        assert!(matches!(
            form.into_parts(),
            Err(DestinationFormError::InvalidSlug)
        ));

        let mut form = base_form();
        form.category = "Safari".to_string();
        assert!(matches!(
            form.into_parts(),
            Err(DestinationFormError::UnknownCategory { .. })
        ));

        let mut form = base_form();
        form.base_price = "15,500.999".to_string();
        assert!(matches!(
            form.into_parts(),
            Err(DestinationFormError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn price_strings_convert_to_cents() {
        assert_eq!(parse_price_cents("15500"), Some(1_550_000));
        assert_eq!(parse_price_cents("15,500"), Some(1_550_000));
        assert_eq!(parse_price_cents("12.34"), Some(1234));
        assert_eq!(parse_price_cents("12.3"), Some(1230));
        assert_eq!(parse_price_cents("-5"), None);
        assert_eq!(parse_price_cents("abc"), None);
    }

    fn base_package_form() -> AddPackageForm {
        AddPackageForm {
            name: "AC Bus from Ahmedabad".to_string(),
            price: "13500".to_string(),
            duration: "8 days / 7 nights".to_string(),
            departure_city: "Ahmedabad".to_string(),
            available_dates: "Oct 10 - Oct 17, 2025\nNov 20 - Nov 27, 2025\n".to_string(),
            itinerary: "1. Departure | Overnight bus\n2. Arrival | Check in | https://img/day2.jpg\n"
                .to_string(),
        }
    }

    #[test]
    fn package_form_builds_a_new_package() {
        let package = base_package_form()
            .into_new_package(7)
            .expect("form should convert");

        assert_eq!(package.destination_id, 7);
        assert_eq!(package.price_cents, 1_350_000);
        assert_eq!(package.available_dates.len(), 2);
        assert_eq!(package.itinerary.len(), 2);
        assert_eq!(package.itinerary[1].image_url.as_deref(), Some("https://img/day2.jpg"));
    }

    #[test]
    fn package_form_rejects_unknown_city_and_bad_labels() {
        let mut form = base_package_form();
        form.departure_city = "Delhi".to_string();
        assert!(matches!(
            form.into_new_package(7),
            Err(PackageFormError::UnknownDepartureCity { .. })
        ));

        let mut form = base_package_form();
        form.available_dates = "Oct 10-17, 2025".to_string();
        assert!(matches!(
            form.into_new_package(7),
            Err(PackageFormError::InvalidDateLabel { .. })
        ));
    }

    #[test]
    fn package_form_enforces_itinerary_contiguity() {
        let mut form = base_package_form();
        form.itinerary = "1. Departure | Overnight bus\n3. Arrival | Check in\n".to_string();

        assert!(matches!(
            form.into_new_package(7),
            Err(PackageFormError::Itinerary(ItineraryError::NotContiguous {
                expected: 2,
                found: 3
            }))
        ));
    }

    #[test]
    fn legacy_documents_parse_with_aliases_and_defaults() {
        let json = r#"[
            {
                "id": "manali",
                "name": "Manali",
                "category": "Mountain",
                "basePrice": 15500,
                "keyStats": {"duration": "8 days", "difficulty": "Moderate", "ageGroup": "12-45", "maxAltitude": "14,100 ft"},
                "longDescription": "Nestled in the mountains...",
                "inclusions": ["Stay"],
                "attractions": [{"name": "Solang Valley", "image": "https://img/solang.jpg"}],
                "departureCities": [{"name": "Mumbai", "price": 15500, "duration": "7 days"}],
                "packages": [
                    {
                        "name": "AC Bus",
                        "price": 13500,
                        "duration": "8 days / 7 nights",
                        "departureCity": "Ahmedabad",
                        "availableDates": ["Oct 10 - Oct 17, 2025"],
                        "itinerary": [{"day": 1, "title": "Departure"}]
                    }
                ]
            }
        ]"#;

        let docs = parse_legacy_destinations(Cursor::new(json)).expect("should parse");
        assert_eq!(docs.len(), 1);

        let doc = &docs[0];
        assert_eq!(doc.id, "manali");
        assert_eq!(doc.base_price, 15500.0);
        assert_eq!(doc.attractions[0].image_url.as_deref(), Some("https://img/solang.jpg"));
        assert_eq!(doc.departure_cities[0].city, "Mumbai");
        assert_eq!(doc.packages[0].itinerary[0].day, 1);
        assert_eq!(legacy_price_cents(doc.packages[0].price), 1_350_000);
    }

    #[test]
    fn malformed_legacy_json_is_an_error() {
        let result = parse_legacy_destinations(Cursor::new("{not json"));
        assert!(matches!(result, Err(ImportFormError::JsonParseError(_))));
    }

    #[test]
    fn import_form_parses_the_uploaded_file() {
        use std::io::{Seek as _, SeekFrom, Write as _};

        use actix_multipart::form::tempfile::TempFile;
        use tempfile::NamedTempFile;

        let json = r#"[{"id": "goa", "name": "Goa", "category": "Beach"}]"#;
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(json.as_bytes()).expect("write json contents");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("rewind json");

        let mut form = ImportDestinationsForm {
            json: TempFile {
                file,
                content_type: None,
                file_name: Some("destinations.json".to_string()),
                size: json.len(),
            },
        };

        let docs = form.parse().expect("should parse");
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "goa");
    }
}
