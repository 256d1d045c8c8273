use mockall::mock;

use super::{
    BookingReader, BookingWriter, DestinationReader, DestinationWriter, PackageReader,
    PackageWriter, UserReader, UserWriter,
};
use crate::domain::booking::{Booking, BookingListQuery, BookingWithUser, NewBooking};
use crate::domain::destination::{
    Destination, DestinationListQuery, NewAttraction, NewDepartureCitySummary, NewDestination,
    NewInclusionItem, UpdateDestination,
};
use crate::domain::package::{NewTravelPackage, TravelPackage};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;

mock! {
    pub DestinationReader {}

    impl DestinationReader for DestinationReader {
        fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>>;
        fn get_destination_by_slug(&self, slug: &str) -> RepositoryResult<Option<Destination>>;
        fn list_destinations(&self, query: DestinationListQuery) -> RepositoryResult<(usize, Vec<Destination>)>;
    }
}

mock! {
    pub DestinationWriter {}

    impl DestinationWriter for DestinationWriter {
        fn create_destination(&self, new_destination: &NewDestination) -> RepositoryResult<Destination>;
        fn update_destination(&self, destination_id: i32, updates: &UpdateDestination) -> RepositoryResult<Destination>;
        fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()>;
        fn replace_attractions(&self, destination_id: i32, attractions: &[NewAttraction]) -> RepositoryResult<()>;
        fn replace_departure_cities(&self, destination_id: i32, cities: &[NewDepartureCitySummary]) -> RepositoryResult<()>;
        fn replace_inclusions(&self, destination_id: i32, items: &[NewInclusionItem]) -> RepositoryResult<()>;
    }
}

mock! {
    pub PackageReader {}

    impl PackageReader for PackageReader {
        fn get_package_by_id(&self, id: i32) -> RepositoryResult<Option<TravelPackage>>;
        fn list_packages(&self, destination_id: i32) -> RepositoryResult<Vec<TravelPackage>>;
    }
}

mock! {
    pub PackageWriter {}

    impl PackageWriter for PackageWriter {
        fn create_package(&self, new_package: &NewTravelPackage) -> RepositoryResult<TravelPackage>;
        fn delete_package(&self, package_id: i32, destination_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub BookingReader {}

    impl BookingReader for BookingReader {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<BookingWithUser>)>;
    }
}

mock! {
    pub BookingWriter {}

    impl BookingWriter for BookingWriter {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    }
}
