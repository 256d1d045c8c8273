use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::domain::booking::{Booking, BookingListQuery, BookingWithUser, Gender, NewBooking};
use crate::domain::destination::Destination;
use crate::domain::package::TravelPackage;
use crate::forms::bookings::RegisterBookingForm;
use crate::repository::{BookingReader, BookingWriter, DestinationReader};
use crate::services::{ServiceError, ServiceResult};
use crate::MAX_PARTICIPANTS;

/// Query parameters carried by the registration link from the planner.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterQuery {
    pub destination: Option<String>,
    pub package: Option<i32>,
    pub date: Option<String>,
    /// Number of participant rows to render, clamped to 1..=MAX_PARTICIPANTS.
    pub participants: Option<usize>,
}

/// Data required to render the registration page.
pub struct RegisterPageData {
    pub destination: Destination,
    pub package: TravelPackage,
    pub date: String,
    pub participants: usize,
    pub max_participants: usize,
    pub genders: Vec<&'static str>,
}

/// Validate that a slug/package/date triple names a bookable departure.
///
/// Any mismatch is `NotFound`; the caller sends the visitor back home, the
/// same guard the registration page has always had against stale links.
fn resolve_booking_target<R>(
    repo: &R,
    slug: &str,
    package_id: i32,
    date: &str,
) -> ServiceResult<(Destination, TravelPackage)>
where
    R: DestinationReader + ?Sized,
{
    let destination = repo
        .get_destination_by_slug(slug)
        .map_err(ServiceError::from)?
        .filter(|destination| destination.is_published)
        .ok_or(ServiceError::NotFound)?;

    let package = destination
        .packages
        .iter()
        .find(|package| package.id == package_id)
        .cloned()
        .ok_or(ServiceError::NotFound)?;

    if !package.available_dates.iter().any(|label| label == date) {
        return Err(ServiceError::NotFound);
    }

    Ok((destination, package))
}

/// Loads the registration page for a planner link.
pub fn load_register_page<R>(repo: &R, query: RegisterQuery) -> ServiceResult<RegisterPageData>
where
    R: DestinationReader + ?Sized,
{
    let slug = query.destination.ok_or(ServiceError::NotFound)?;
    let package_id = query.package.ok_or(ServiceError::NotFound)?;
    let date = query.date.ok_or(ServiceError::NotFound)?;
    let participants = query.participants.unwrap_or(1).clamp(1, MAX_PARTICIPANTS);

    let (destination, package) = resolve_booking_target(repo, &slug, package_id, &date)?;

    Ok(RegisterPageData {
        destination,
        package,
        date,
        participants,
        max_participants: MAX_PARTICIPANTS,
        genders: Gender::ALL.map(Gender::as_str).to_vec(),
    })
}

/// Create a booking from the submitted registration form.
///
/// One write, no retry; a failure is reported back to the visitor.
pub fn submit_registration<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: RegisterBookingForm,
) -> ServiceResult<Booking>
where
    R: DestinationReader + BookingWriter + ?Sized,
{
    let participants = form
        .participants()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let (destination, package) =
        resolve_booking_target(repo, &form.destination, form.package, &form.date)?;

    let new_booking = NewBooking::new(user.id, destination.id, package.id, form.date)
        .with_participants(participants);

    repo.create_booking(&new_booking).map_err(ServiceError::from)
}

/// Data required to render the profile page.
pub struct ProfilePageData {
    pub bookings: Vec<BookingWithUser>,
}

/// Loads the signed-in visitor's bookings, newest first.
pub fn load_profile_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<ProfilePageData>
where
    R: BookingReader + ?Sized,
{
    let (_, bookings) = repo
        .list_bookings(BookingListQuery::new().user_id(user.id))
        .map_err(ServiceError::from)?;

    Ok(ProfilePageData { bookings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::booking::NewParticipant;
    use crate::domain::destination::{Category, Difficulty, KeyStats};
    use crate::domain::package::ItineraryDay;
    use crate::repository::mock::{MockBookingWriter, MockDestinationReader};
    use crate::repository::RepositoryResult;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_destination() -> Destination {
        Destination {
            id: 1,
            slug: "manali".to_string(),
            name: "Manali".to_string(),
            subtitle: None,
            category: Category::Mountain,
            base_price_cents: 1_350_000,
            stats: KeyStats {
                duration: "8 days / 7 nights".to_string(),
                difficulty: Difficulty::Moderate,
                age_group: "12-45 years".to_string(),
                max_altitude: "14,100 ft".to_string(),
            },
            long_description: String::new(),
            important_update: None,
            image_url: None,
            is_published: true,
            inclusions: Vec::new(),
            attractions: Vec::new(),
            departure_cities: Vec::new(),
            packages: vec![TravelPackage {
                id: 11,
                destination_id: 1,
                name: "AC Bus from Ahmedabad".to_string(),
                price_cents: 1_350_000,
                duration: "8 days / 7 nights".to_string(),
                departure_city: "Ahmedabad".to_string(),
                available_dates: vec!["Oct 10 - Oct 17, 2025".to_string()],
                itinerary: vec![ItineraryDay {
                    day_number: 1,
                    title: "Departure".to_string(),
                    description: String::new(),
                    image_url: None,
                }],
                created_at: datetime(),
                updated_at: datetime(),
            }],
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn visitor() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 7,
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            roles: vec!["user".to_string()],
        }
    }

    struct FakeRepo {
        destinations: MockDestinationReader,
        bookings: MockBookingWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                destinations: MockDestinationReader::new(),
                bookings: MockBookingWriter::new(),
            }
        }
    }

    impl DestinationReader for FakeRepo {
        fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>> {
            self.destinations.get_destination_by_id(id)
        }

        fn get_destination_by_slug(&self, slug: &str) -> RepositoryResult<Option<Destination>> {
            self.destinations.get_destination_by_slug(slug)
        }

        fn list_destinations(
            &self,
            query: crate::domain::destination::DestinationListQuery,
        ) -> RepositoryResult<(usize, Vec<Destination>)> {
            self.destinations.list_destinations(query)
        }
    }

    impl BookingWriter for FakeRepo {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking> {
            self.bookings.create_booking(new_booking)
        }
    }

    fn form_with_date(date: &str) -> RegisterBookingForm {
        RegisterBookingForm {
            destination: "manali".to_string(),
            package: 11,
            date: date.to_string(),
            first_name: vec!["Asha".to_string()],
            last_name: vec!["Patel".to_string()],
            mobile: vec!["9876543210".to_string()],
            birth_date: vec!["1994-05-12".to_string()],
            gender: vec!["Female".to_string()],
            terms: Some("on".to_string()),
        }
    }

    #[test]
    fn registration_persists_the_booking() {
        let mut repo = FakeRepo::new();
        repo.destinations
            .expect_get_destination_by_slug()
            .returning(|_| Ok(Some(sample_destination())));

        repo.bookings
            .expect_create_booking()
            .times(1)
            .withf(|new_booking| {
                assert_eq!(new_booking.user_id, 7);
                assert_eq!(new_booking.destination_id, 1);
                assert_eq!(new_booking.package_id, 11);
                assert_eq!(new_booking.selected_date, "Oct 10 - Oct 17, 2025");
                assert_eq!(new_booking.participants.len(), 1);
                true
            })
            .returning(|new_booking| {
                Ok(Booking {
                    id: 99,
                    user_id: new_booking.user_id,
                    destination_id: new_booking.destination_id,
                    package_id: new_booking.package_id,
                    selected_date: new_booking.selected_date.clone(),
                    participant_count: new_booking.participants.len() as i32,
                    participants: Vec::new(),
                    created_at: datetime(),
                    updated_at: datetime(),
                })
            });

        let booking = submit_registration(&repo, &visitor(), form_with_date("Oct 10 - Oct 17, 2025"))
            .expect("expected success");
        assert_eq!(booking.id, 99);
    }

    #[test]
    fn registration_rejects_a_date_the_package_does_not_offer() {
        let mut repo = FakeRepo::new();
        repo.destinations
            .expect_get_destination_by_slug()
            .returning(|_| Ok(Some(sample_destination())));

        let result =
            submit_registration(&repo, &visitor(), form_with_date("Dec 1 - Dec 8, 2025"));
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn registration_surfaces_participant_errors_as_form_errors() {
        let repo = FakeRepo::new();

        let mut form = form_with_date("Oct 10 - Oct 17, 2025");
        form.terms = None;

        let result = submit_registration(&repo, &visitor(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn register_page_requires_a_complete_valid_link() {
        let mut repo = FakeRepo::new();
        repo.destinations
            .expect_get_destination_by_slug()
            .returning(|_| Ok(Some(sample_destination())));

        let data = load_register_page(
            &repo,
            RegisterQuery {
                destination: Some("manali".to_string()),
                package: Some(11),
                date: Some("Oct 10 - Oct 17, 2025".to_string()),
                ..Default::default()
            },
        )
        .expect("expected success");
        assert_eq!(data.package.id, 11);
        assert_eq!(data.max_participants, MAX_PARTICIPANTS);

        let missing = load_register_page(&repo, RegisterQuery::default());
        assert!(matches!(missing, Err(ServiceError::NotFound)));

        let wrong_package = load_register_page(
            &repo,
            RegisterQuery {
                destination: Some("manali".to_string()),
                package: Some(999),
                date: Some("Oct 10 - Oct 17, 2025".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(wrong_package, Err(ServiceError::NotFound)));
    }
}
