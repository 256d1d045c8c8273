use serde::Deserialize;

use crate::ADMIN_ROLE;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::booking::{BookingListQuery, BookingWithUser};
use crate::domain::destination::{
    Destination, DestinationListQuery, NewAttraction, NewDepartureCitySummary, NewDestination,
    NewInclusionItem, UpdateDestination,
};
use crate::domain::package::{
    DEPARTURE_CITIES, NewItineraryDay, NewTravelPackage, TravelPackage, validate_itinerary,
};
use crate::domain::availability::parse_start_date;
use crate::forms::destinations::{
    AddPackageForm, DestinationForm, LegacyDestination, legacy_price_cents,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{BookingReader, DestinationReader, DestinationWriter, PackageWriter};
use crate::services::{ServiceError, ServiceResult};

fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if check_role(ADMIN_ROLE, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Data required to render the admin dashboard.
pub struct AdminPageData {
    pub destinations: Vec<Destination>,
    pub total_bookings: usize,
}

/// Loads the admin dashboard: every destination, drafts included.
pub fn load_admin_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<AdminPageData>
where
    R: DestinationReader + BookingReader + ?Sized,
{
    ensure_admin(user)?;

    let (_, destinations) = repo
        .list_destinations(DestinationListQuery::new().include_unpublished())
        .map_err(ServiceError::from)?;
    let (total_bookings, _) = repo
        .list_bookings(BookingListQuery::new().paginate(1, 1))
        .map_err(ServiceError::from)?;

    Ok(AdminPageData {
        destinations,
        total_bookings,
    })
}

/// Loads one destination for the edit form, drafts included.
pub fn load_destination_for_edit<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
) -> ServiceResult<Destination>
where
    R: DestinationReader + ?Sized,
{
    ensure_admin(user)?;

    repo.get_destination_by_id(destination_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

fn replace_lists<R>(
    repo: &R,
    destination_id: i32,
    inclusions: &[NewInclusionItem],
    attractions: &[NewAttraction],
    departure_cities: &[NewDepartureCitySummary],
) -> ServiceResult<()>
where
    R: DestinationWriter + ?Sized,
{
    repo.replace_inclusions(destination_id, inclusions)
        .map_err(ServiceError::from)?;
    repo.replace_attractions(destination_id, attractions)
        .map_err(ServiceError::from)?;
    repo.replace_departure_cities(destination_id, departure_cities)
        .map_err(ServiceError::from)?;
    Ok(())
}

/// Create a destination from the admin form.
pub fn create_destination<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: DestinationForm,
) -> ServiceResult<Destination>
where
    R: DestinationReader + DestinationWriter + ?Sized,
{
    ensure_admin(user)?;

    let parts = form
        .into_parts()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_destination_by_slug(&parts.destination.slug)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Form(format!(
            "The slug `{}` is already in use.",
            parts.destination.slug
        )));
    }

    let created = repo
        .create_destination(&parts.destination)
        .map_err(ServiceError::from)?;

    if let Err(err) = replace_lists(
        repo,
        created.id,
        &parts.inclusions,
        &parts.attractions,
        &parts.departure_cities,
    ) {
        log::error!("Failed to attach lists to destination {}: {err}", created.id);
        if let Err(delete_err) = repo.delete_destination(created.id) {
            log::error!(
                "Failed to roll back destination {} after list error: {delete_err}",
                created.id
            );
        }
        return Err(err);
    }

    repo.get_destination_by_id(created.id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Apply the admin edit form to an existing destination.
pub fn update_destination<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
    form: DestinationForm,
) -> ServiceResult<Destination>
where
    R: DestinationReader + DestinationWriter + ?Sized,
{
    ensure_admin(user)?;

    let parts = form
        .into_update_parts()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_destination(destination_id, &parts.update)
        .map_err(ServiceError::from)?;
    replace_lists(
        repo,
        destination_id,
        &parts.inclusions,
        &parts.attractions,
        &parts.departure_cities,
    )?;

    repo.get_destination_by_id(destination_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Delete a destination and everything it owns.
pub fn delete_destination<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
) -> ServiceResult<()>
where
    R: DestinationWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_destination(destination_id)
        .map_err(ServiceError::from)
}

/// Record a freshly uploaded hero image against a destination.
pub fn set_hero_image<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
    image_url: &str,
) -> ServiceResult<()>
where
    R: DestinationWriter + ?Sized,
{
    ensure_admin(user)?;
    let update = UpdateDestination::new().image_url(Some(image_url));
    repo.update_destination(destination_id, &update)
        .map_err(ServiceError::from)?;
    Ok(())
}

/// Add a package to a destination from the admin form.
pub fn add_package<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
    form: AddPackageForm,
) -> ServiceResult<TravelPackage>
where
    R: DestinationReader + PackageWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.get_destination_by_id(destination_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let new_package = form
        .into_new_package(destination_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_package(&new_package).map_err(ServiceError::from)
}

/// Remove a package from a destination.
pub fn delete_package<R>(
    repo: &R,
    user: &AuthenticatedUser,
    destination_id: i32,
    package_id: i32,
) -> ServiceResult<()>
where
    R: PackageWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_package(package_id, destination_id)
        .map_err(ServiceError::from)
}

/// Query parameters accepted by the admin bookings page.
#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    pub page: Option<usize>,
}

/// Data required to render the admin bookings page.
pub struct BookingsPageData {
    pub bookings: Paginated<BookingWithUser>,
}

/// Loads all bookings, newest first.
pub fn load_bookings_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: BookingsQuery,
) -> ServiceResult<BookingsPageData>
where
    R: BookingReader + ?Sized,
{
    ensure_admin(user)?;

    let page = query.page.unwrap_or(1);
    let (total, items) = repo
        .list_bookings(BookingListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE))
        .map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(BookingsPageData {
        bookings: Paginated::new(items, page, total_pages),
    })
}

/// Export every booking as CSV, one row per participant.
pub fn export_bookings_csv<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<u8>>
where
    R: BookingReader + ?Sized,
{
    ensure_admin(user)?;

    let (_, bookings) = repo
        .list_bookings(BookingListQuery::new())
        .map_err(ServiceError::from)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "booking_id",
            "booked_on",
            "user_name",
            "user_email",
            "destination",
            "package",
            "selected_date",
            "participant",
            "mobile",
            "birth_date",
            "gender",
        ])
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    for entry in &bookings {
        let booking = &entry.booking;
        let booked_on = booking.created_at.format("%Y-%m-%d %H:%M").to_string();
        for participant in &booking.participants {
            writer
                .write_record([
                    booking.id.to_string(),
                    booked_on.clone(),
                    entry.user_name.clone(),
                    entry.user_email.clone(),
                    entry.destination_name.clone(),
                    entry.package_name.clone(),
                    booking.selected_date.clone(),
                    format!("{} {}", participant.first_name, participant.last_name),
                    participant.mobile.clone(),
                    participant.birth_date.format("%Y-%m-%d").to_string(),
                    participant.gender.as_str().to_string(),
                ])
                .map_err(|err| ServiceError::Internal(err.to_string()))?;
        }
    }

    writer
        .into_inner()
        .map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Result of a legacy content import run.
pub struct ImportOutcome {
    pub imported: usize,
    pub errors: Vec<String>,
}

/// One-time migration pass: validate legacy destination documents into the
/// canonical schema and insert them. Records that fail validation are
/// reported individually; the rest still import.
pub fn import_destinations<R>(
    repo: &R,
    user: &AuthenticatedUser,
    docs: Vec<LegacyDestination>,
) -> ServiceResult<ImportOutcome>
where
    R: DestinationReader + DestinationWriter + PackageWriter + ?Sized,
{
    ensure_admin(user)?;

    let mut imported = 0usize;
    let mut errors = Vec::new();

    for doc in docs {
        let slug = doc.id.clone();
        match import_one(repo, doc) {
            Ok(()) => imported += 1,
            Err(ServiceError::Form(message)) => errors.push(format!("{slug}: {message}")),
            Err(other) => return Err(other),
        }
    }

    Ok(ImportOutcome { imported, errors })
}

fn import_one<R>(repo: &R, doc: LegacyDestination) -> ServiceResult<()>
where
    R: DestinationReader + DestinationWriter + PackageWriter + ?Sized,
{
    use crate::domain::destination::{Category, Difficulty, KeyStats};

    if repo
        .get_destination_by_slug(&doc.id)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Form("slug already exists".to_string()));
    }

    let category = Category::parse(&doc.category)
        .ok_or_else(|| ServiceError::Form(format!("unknown category `{}`", doc.category)))?;

    let stats = match &doc.key_stats {
        Some(stats) => KeyStats {
            duration: stats.duration.clone(),
            difficulty: stats.difficulty.as_str().into(),
            age_group: stats.age_group.clone(),
            max_altitude: stats.max_altitude.clone(),
        },
        None => KeyStats {
            duration: String::new(),
            difficulty: Difficulty::Moderate,
            age_group: String::new(),
            max_altitude: String::new(),
        },
    };

    // Validate packages before touching the database.
    let mut new_packages = Vec::with_capacity(doc.packages.len());
    for package in &doc.packages {
        if !DEPARTURE_CITIES.contains(&package.departure_city.as_str()) {
            return Err(ServiceError::Form(format!(
                "unknown departure city `{}`",
                package.departure_city
            )));
        }
        for label in &package.available_dates {
            if parse_start_date(label).is_none() {
                return Err(ServiceError::Form(format!(
                    "date label `{label}` does not match `Sep 26 - Oct 3, 2025`"
                )));
            }
        }
        let itinerary: Vec<NewItineraryDay> = package
            .itinerary
            .iter()
            .map(|day| NewItineraryDay {
                day_number: day.day,
                title: day.title.clone(),
                description: day.description.clone(),
                image_url: day.image_url.clone(),
            })
            .collect();
        validate_itinerary(&itinerary).map_err(|err| ServiceError::Form(err.to_string()))?;

        new_packages.push((package, itinerary));
    }

    let mut destination = NewDestination::new(
        doc.id.clone(),
        doc.name.clone(),
        category,
        legacy_price_cents(doc.base_price),
        stats,
    )
    .with_long_description(doc.long_description.clone())
    .published();
    if let Some(subtitle) = &doc.subtitle {
        destination = destination.with_subtitle(subtitle.clone());
    }
    if let Some(update) = &doc.important_update {
        destination = destination.with_important_update(update.clone());
    }
    if let Some(url) = &doc.image_url {
        destination = destination.with_image_url(url.clone());
    }

    let mut inclusions: Vec<NewInclusionItem> = doc
        .inclusions
        .iter()
        .map(|label| NewInclusionItem {
            label: label.clone(),
            excluded: false,
        })
        .collect();
    inclusions.extend(doc.exclusions.iter().map(|label| NewInclusionItem {
        label: label.clone(),
        excluded: true,
    }));

    let attractions: Vec<NewAttraction> = doc
        .attractions
        .iter()
        .map(|attraction| NewAttraction {
            name: attraction.name.clone(),
            image_url: attraction.image_url.clone(),
        })
        .collect();

    let departure_cities: Vec<NewDepartureCitySummary> = doc
        .departure_cities
        .iter()
        .map(|city| NewDepartureCitySummary {
            city: city.city.clone(),
            image_url: city.image_url.clone(),
            price_cents: legacy_price_cents(city.price),
            duration: city.duration.clone(),
        })
        .collect();

    let created = repo
        .create_destination(&destination)
        .map_err(ServiceError::from)?;

    let attach = || -> ServiceResult<()> {
        replace_lists(repo, created.id, &inclusions, &attractions, &departure_cities)?;
        for (package, itinerary) in &new_packages {
            let new_package = NewTravelPackage::new(
                created.id,
                package.name.clone(),
                legacy_price_cents(package.price),
                package.duration.clone(),
                package.departure_city.clone(),
            )
            .with_dates(package.available_dates.clone())
            .with_itinerary(itinerary.clone());
            repo.create_package(&new_package).map_err(ServiceError::from)?;
        }
        Ok(())
    };

    if let Err(err) = attach() {
        log::error!("Failed to import destination {}: {err}", created.id);
        if let Err(delete_err) = repo.delete_destination(created.id) {
            log::error!(
                "Failed to roll back destination {} after import error: {delete_err}",
                created.id
            );
        }
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::booking::{Booking, Gender, Participant};
    use crate::forms::destinations::parse_legacy_destinations;
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{
        MockBookingReader, MockDestinationReader, MockDestinationWriter, MockPackageWriter,
    };
    use std::io::Cursor;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            roles: vec!["user".to_string(), ADMIN_ROLE.to_string()],
        }
    }

    fn plain_user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 2,
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            roles: vec!["user".to_string()],
        }
    }

    struct FakeRepo {
        destination_reader: MockDestinationReader,
        destination_writer: MockDestinationWriter,
        package_writer: MockPackageWriter,
        booking_reader: MockBookingReader,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                destination_reader: MockDestinationReader::new(),
                destination_writer: MockDestinationWriter::new(),
                package_writer: MockPackageWriter::new(),
                booking_reader: MockBookingReader::new(),
            }
        }
    }

    impl DestinationReader for FakeRepo {
        fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>> {
            self.destination_reader.get_destination_by_id(id)
        }

        fn get_destination_by_slug(&self, slug: &str) -> RepositoryResult<Option<Destination>> {
            self.destination_reader.get_destination_by_slug(slug)
        }

        fn list_destinations(
            &self,
            query: DestinationListQuery,
        ) -> RepositoryResult<(usize, Vec<Destination>)> {
            self.destination_reader.list_destinations(query)
        }
    }

    impl DestinationWriter for FakeRepo {
        fn create_destination(
            &self,
            new_destination: &NewDestination,
        ) -> RepositoryResult<Destination> {
            self.destination_writer.create_destination(new_destination)
        }

        fn update_destination(
            &self,
            destination_id: i32,
            updates: &UpdateDestination,
        ) -> RepositoryResult<Destination> {
            self.destination_writer
                .update_destination(destination_id, updates)
        }

        fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()> {
            self.destination_writer.delete_destination(destination_id)
        }

        fn replace_attractions(
            &self,
            destination_id: i32,
            attractions: &[NewAttraction],
        ) -> RepositoryResult<()> {
            self.destination_writer
                .replace_attractions(destination_id, attractions)
        }

        fn replace_departure_cities(
            &self,
            destination_id: i32,
            cities: &[NewDepartureCitySummary],
        ) -> RepositoryResult<()> {
            self.destination_writer
                .replace_departure_cities(destination_id, cities)
        }

        fn replace_inclusions(
            &self,
            destination_id: i32,
            items: &[NewInclusionItem],
        ) -> RepositoryResult<()> {
            self.destination_writer
                .replace_inclusions(destination_id, items)
        }
    }

    impl PackageWriter for FakeRepo {
        fn create_package(
            &self,
            new_package: &NewTravelPackage,
        ) -> RepositoryResult<TravelPackage> {
            self.package_writer.create_package(new_package)
        }

        fn delete_package(&self, package_id: i32, destination_id: i32) -> RepositoryResult<()> {
            self.package_writer.delete_package(package_id, destination_id)
        }
    }

    impl BookingReader for FakeRepo {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>> {
            self.booking_reader.get_booking_by_id(id)
        }

        fn list_bookings(
            &self,
            query: BookingListQuery,
        ) -> RepositoryResult<(usize, Vec<BookingWithUser>)> {
            self.booking_reader.list_bookings(query)
        }
    }

    fn sample_destination(id: i32, slug: &str) -> Destination {
        use crate::domain::destination::{Category, Difficulty, KeyStats};
        Destination {
            id,
            slug: slug.to_string(),
            name: "Manali".to_string(),
            subtitle: None,
            category: Category::Mountain,
            base_price_cents: 1_350_000,
            stats: KeyStats {
                duration: "8 days".to_string(),
                difficulty: Difficulty::Moderate,
                age_group: String::new(),
                max_altitude: String::new(),
            },
            long_description: String::new(),
            important_update: None,
            image_url: None,
            is_published: true,
            inclusions: Vec::new(),
            attractions: Vec::new(),
            departure_cities: Vec::new(),
            packages: Vec::new(),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    #[test]
    fn admin_services_require_the_admin_role() {
        let repo = FakeRepo::new();
        let user = plain_user();

        assert!(matches!(
            load_admin_page(&repo, &user),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            delete_destination(&repo, &user, 1),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            export_bookings_csv(&repo, &user),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            import_destinations(&repo, &user, Vec::new()),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn export_writes_one_row_per_participant() {
        let mut repo = FakeRepo::new();

        repo.booking_reader.expect_list_bookings().returning(|_| {
            let booking = Booking {
                id: 5,
                user_id: 7,
                destination_id: 1,
                package_id: 11,
                selected_date: "Oct 10 - Oct 17, 2025".to_string(),
                participant_count: 2,
                participants: vec![
                    Participant {
                        id: 1,
                        first_name: "Asha".to_string(),
                        last_name: "Patel".to_string(),
                        mobile: "9876543210".to_string(),
                        birth_date: NaiveDate::from_ymd_opt(1994, 5, 12).unwrap(),
                        gender: Gender::Female,
                    },
                    Participant {
                        id: 2,
                        first_name: "Rohan".to_string(),
                        last_name: "Patel".to_string(),
                        mobile: "9876500000".to_string(),
                        birth_date: NaiveDate::from_ymd_opt(1991, 1, 30).unwrap(),
                        gender: Gender::Male,
                    },
                ],
                created_at: datetime(),
                updated_at: datetime(),
            };
            Ok((
                1,
                vec![BookingWithUser {
                    booking,
                    user_name: "Asha".to_string(),
                    user_email: "asha@example.com".to_string(),
                    destination_name: "Manali".to_string(),
                    package_name: "AC Bus".to_string(),
                }],
            ))
        });

        let bytes = export_bookings_csv(&repo, &admin()).expect("expected success");
        let csv = String::from_utf8(bytes).expect("valid utf-8");

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("booking_id,"));
        assert!(lines[1].contains("Asha Patel"));
        assert!(lines[1].contains("\"Oct 10 - Oct 17, 2025\""));
        assert!(lines[2].contains("Rohan Patel"));
    }

    #[test]
    fn import_creates_destinations_and_packages() {
        let mut repo = FakeRepo::new();

        repo.destination_reader
            .expect_get_destination_by_slug()
            .returning(|_| Ok(None));

        repo.destination_writer
            .expect_create_destination()
            .times(1)
            .withf(|new_destination| {
                assert_eq!(new_destination.slug, "manali");
                assert_eq!(new_destination.base_price_cents, 1_550_000);
                assert!(new_destination.is_published);
                true
            })
            .returning(|new_destination| {
                Ok(sample_destination(42, new_destination.slug.as_str()))
            });

        repo.destination_writer
            .expect_replace_inclusions()
            .times(1)
            .returning(|_, _| Ok(()));
        repo.destination_writer
            .expect_replace_attractions()
            .times(1)
            .returning(|_, _| Ok(()));
        repo.destination_writer
            .expect_replace_departure_cities()
            .times(1)
            .returning(|_, _| Ok(()));

        repo.package_writer
            .expect_create_package()
            .times(1)
            .withf(|new_package| {
                assert_eq!(new_package.destination_id, 42);
                assert_eq!(new_package.departure_city, "Ahmedabad");
                assert_eq!(new_package.available_dates.len(), 1);
                true
            })
            .returning(|new_package| {
                Ok(TravelPackage {
                    id: 1,
                    destination_id: new_package.destination_id,
                    name: new_package.name.clone(),
                    price_cents: new_package.price_cents,
                    duration: new_package.duration.clone(),
                    departure_city: new_package.departure_city.clone(),
                    available_dates: new_package.available_dates.clone(),
                    itinerary: Vec::new(),
                    created_at: datetime(),
                    updated_at: datetime(),
                })
            });

        let json = r#"[
            {
                "id": "manali",
                "name": "Manali",
                "category": "Mountain",
                "basePrice": 15500,
                "inclusions": ["Stay"],
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

        let outcome = import_destinations(&repo, &admin(), docs).expect("expected success");
        assert_eq!(outcome.imported, 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn import_reports_invalid_records_without_touching_the_database() {
        let mut repo = FakeRepo::new();

        repo.destination_reader
            .expect_get_destination_by_slug()
            .returning(|_| Ok(None));

        let json = r#"[
            {
                "id": "goa",
                "name": "Goa",
                "category": "Seaside",
                "basePrice": 14000
            },
            {
                "id": "manali",
                "name": "Manali",
                "category": "Mountain",
                "basePrice": 15500,
                "packages": [
                    {
                        "name": "AC Bus",
                        "price": 13500,
                        "duration": "8 days",
                        "departureCity": "Ahmedabad",
                        "availableDates": ["Oct 5-12, 2025"]
                    }
                ]
            }
        ]"#;
        let docs = parse_legacy_destinations(Cursor::new(json)).expect("should parse");

        let outcome = import_destinations(&repo, &admin(), docs).expect("expected success");
        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].contains("goa"));
        assert!(outcome.errors[1].contains("manali"));
    }

    #[test]
    fn add_package_requires_an_existing_destination() {
        let mut repo = FakeRepo::new();
        repo.destination_reader
            .expect_get_destination_by_id()
            .returning(|_| Ok(None));

        let form = AddPackageForm {
            name: "AC Bus".to_string(),
            price: "13500".to_string(),
            duration: "8 days".to_string(),
            departure_city: "Ahmedabad".to_string(),
            available_dates: String::new(),
            itinerary: String::new(),
        };

        let result = add_package(&repo, &admin(), 42, form);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
