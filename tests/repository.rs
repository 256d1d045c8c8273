use travelbuddy::domain::booking::{BookingListQuery, Gender, NewBooking, NewParticipant};
use travelbuddy::domain::destination::{
    Category, DestinationListQuery, Difficulty, KeyStats, NewAttraction,
    NewDepartureCitySummary, NewDestination, NewInclusionItem, UpdateDestination,
};
use travelbuddy::domain::package::{NewItineraryDay, NewTravelPackage};
use travelbuddy::domain::user::{NewUser, UpdateUser};
use travelbuddy::repository::{
    BookingReader, BookingWriter, DestinationReader, DestinationWriter, DieselRepository,
    PackageReader, PackageWriter, RepositoryError, UserReader, UserWriter,
};

mod common;

fn stats() -> KeyStats {
    KeyStats {
        duration: "8 days / 7 nights".to_string(),
        difficulty: Difficulty::Moderate,
        age_group: "12-45 years".to_string(),
        max_altitude: "14,100 ft".to_string(),
    }
}

fn manali() -> NewDestination {
    NewDestination::new("manali", "Manali", Category::Mountain, 1_350_000, stats())
        .with_subtitle("Himalayan resort town")
        .with_long_description("Nestled in the mountains of Himachal Pradesh.")
        .published()
}

#[test]
fn test_destination_repository_crud() {
    let test_db = common::TestDb::new("test_destination_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo.create_destination(&manali()).unwrap();
    assert_eq!(created.slug, "manali");
    assert!(created.is_published);

    repo.replace_inclusions(
        created.id,
        &[
            NewInclusionItem {
                label: "Accommodation".to_string(),
                excluded: false,
            },
            NewInclusionItem {
                label: "Flights".to_string(),
                excluded: true,
            },
        ],
    )
    .unwrap();
    repo.replace_attractions(
        created.id,
        &[NewAttraction {
            name: "Solang Valley".to_string(),
            image_url: Some("/assets/uploads/solang.jpg".to_string()),
        }],
    )
    .unwrap();
    repo.replace_departure_cities(
        created.id,
        &[
            NewDepartureCitySummary {
                city: "Mumbai".to_string(),
                image_url: None,
                price_cents: 1_550_000,
                duration: "7 days".to_string(),
            },
            NewDepartureCitySummary {
                city: "Ahmedabad".to_string(),
                image_url: None,
                price_cents: 1_350_000,
                duration: "8 days".to_string(),
            },
        ],
    )
    .unwrap();

    let loaded = repo
        .get_destination_by_slug("manali")
        .unwrap()
        .expect("destination should exist");
    assert_eq!(loaded.inclusions.len(), 2);
    assert!(loaded.inclusions[1].excluded);
    assert_eq!(loaded.attractions[0].name, "Solang Valley");
    assert_eq!(
        loaded.city_names(),
        vec!["Mumbai".to_string(), "Ahmedabad".to_string()]
    );

    // Drafts are excluded from the public listing by default.
    let draft = NewDestination::new("goa", "Goa", Category::Beach, 1_400_000, stats());
    repo.create_destination(&draft).unwrap();

    let (total, items) = repo.list_destinations(DestinationListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].slug, "manali");

    let (total_all, _) = repo
        .list_destinations(DestinationListQuery::new().include_unpublished())
        .unwrap();
    assert_eq!(total_all, 2);

    let (by_category, _) = repo
        .list_destinations(DestinationListQuery::new().category(Category::Beach))
        .unwrap();
    assert_eq!(by_category, 0);

    let (by_search, _) = repo
        .list_destinations(DestinationListQuery::new().search("Himachal"))
        .unwrap();
    assert_eq!(by_search, 1);

    let updated = repo
        .update_destination(
            loaded.id,
            &UpdateDestination::new()
                .name("Manali & Kasol")
                .published(false),
        )
        .unwrap();
    assert_eq!(updated.name, "Manali & Kasol");
    assert!(!updated.is_published);
    // Untouched fields survive a partial patch.
    assert_eq!(updated.subtitle.as_deref(), Some("Himalayan resort town"));

    assert!(matches!(
        repo.delete_destination(9999),
        Err(RepositoryError::NotFound)
    ));
    repo.delete_destination(loaded.id).unwrap();
    assert!(repo.get_destination_by_slug("manali").unwrap().is_none());
}

#[test]
fn test_package_and_booking_flow() {
    let test_db = common::TestDb::new("test_package_and_booking_flow.db");
    let repo = DieselRepository::new(test_db.pool());

    let destination = repo.create_destination(&manali()).unwrap();

    let new_package = NewTravelPackage::new(
        destination.id,
        "AC Bus from Ahmedabad",
        1_350_000,
        "8 days / 7 nights",
        "Ahmedabad",
    )
    .with_dates(vec![
        "Oct 10 - Oct 17, 2025".to_string(),
        "Nov 20 - Nov 27, 2025".to_string(),
    ])
    .with_itinerary(vec![
        NewItineraryDay {
            day_number: 1,
            title: "Departure".to_string(),
            description: "Overnight bus".to_string(),
            image_url: None,
        },
        NewItineraryDay {
            day_number: 2,
            title: "Arrival".to_string(),
            description: "Check in".to_string(),
            image_url: None,
        },
    ]);

    let package = repo.create_package(&new_package).unwrap();
    assert_eq!(
        package.available_dates,
        vec!["Oct 10 - Oct 17, 2025", "Nov 20 - Nov 27, 2025"]
    );
    assert_eq!(package.itinerary.len(), 2);
    assert_eq!(package.itinerary[0].day_number, 1);

    let listed = repo.list_packages(destination.id).unwrap();
    assert_eq!(listed.len(), 1);

    // Deleting through the wrong destination is a no-op error.
    assert!(matches!(
        repo.delete_package(package.id, destination.id + 1),
        Err(RepositoryError::NotFound)
    ));

    let user = repo
        .create_user(&NewUser::new("Asha", "Asha@Example.com", "$argon2id$fake"))
        .unwrap();
    assert_eq!(user.email, "asha@example.com");

    let new_booking = NewBooking::new(
        user.id,
        destination.id,
        package.id,
        "Oct 10 - Oct 17, 2025",
    )
    .with_participants(vec![
        NewParticipant {
            first_name: "Asha".to_string(),
            last_name: "Patel".to_string(),
            mobile: "9876543210".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(1994, 5, 12).unwrap(),
            gender: Gender::Female,
        },
        NewParticipant {
            first_name: "Rohan".to_string(),
            last_name: "Patel".to_string(),
            mobile: "9876500000".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(1991, 1, 30).unwrap(),
            gender: Gender::Male,
        },
    ]);

    let booking = repo.create_booking(&new_booking).unwrap();
    assert_eq!(booking.participant_count, 2);
    assert_eq!(booking.participants.len(), 2);
    assert_eq!(booking.participants[0].first_name, "Asha");

    let fetched = repo
        .get_booking_by_id(booking.id)
        .unwrap()
        .expect("booking should exist");
    assert_eq!(fetched.selected_date, "Oct 10 - Oct 17, 2025");

    let (total, rows) = repo
        .list_bookings(BookingListQuery::new().user_id(user.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].user_email, "asha@example.com");
    assert_eq!(rows[0].destination_name, "Manali");
    assert_eq!(rows[0].package_name, "AC Bus from Ahmedabad");

    let (none, _) = repo
        .list_bookings(BookingListQuery::new().user_id(user.id + 1))
        .unwrap();
    assert_eq!(none, 0);

    // Deleting the destination cascades to packages and bookings.
    repo.delete_destination(destination.id).unwrap();
    assert!(repo.get_package_by_id(package.id).unwrap().is_none());
    assert!(repo.get_booking_by_id(booking.id).unwrap().is_none());
}

#[test]
fn test_user_repository() {
    let test_db = common::TestDb::new("test_user_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&NewUser::new("Asha", "asha@example.com", "$argon2id$fake"))
        .unwrap();
    assert_eq!(user.roles, vec!["user".to_string()]);

    // Lookups are case-insensitive because emails are stored lowercased.
    let found = repo.get_user_by_email("ASHA@example.com").unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let duplicate = repo.create_user(&NewUser::new("Other", "Asha@example.com", "$argon2id$fake"));
    assert!(matches!(duplicate, Err(RepositoryError::Database(_))));

    let promoted = repo
        .update_user(
            user.id,
            &UpdateUser::new().roles(vec!["user".to_string(), "admin".to_string()]),
        )
        .unwrap();
    assert!(promoted.has_role("admin"));

    assert!(repo.get_user_by_id(user.id + 1).unwrap().is_none());
}
