use crate::db::{DbConnection, DbPool};
use crate::domain::booking::{Booking, BookingListQuery, BookingWithUser, NewBooking};
use crate::domain::destination::{
    Destination, DestinationListQuery, NewAttraction, NewDepartureCitySummary, NewDestination,
    NewInclusionItem, UpdateDestination,
};
use crate::domain::package::{NewTravelPackage, TravelPackage};
use crate::domain::user::{NewUser, UpdateUser, User};

pub mod errors;

pub mod booking;
pub mod destination;
pub mod package;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over destination records.
pub trait DestinationReader {
    fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<Destination>>;
    fn get_destination_by_slug(&self, slug: &str) -> RepositoryResult<Option<Destination>>;
    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<Destination>)>;
}

/// Write operations over destination records and their owned lists.
pub trait DestinationWriter {
    fn create_destination(&self, new_destination: &NewDestination)
    -> RepositoryResult<Destination>;
    fn update_destination(
        &self,
        destination_id: i32,
        updates: &UpdateDestination,
    ) -> RepositoryResult<Destination>;
    fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()>;
    fn replace_attractions(
        &self,
        destination_id: i32,
        attractions: &[NewAttraction],
    ) -> RepositoryResult<()>;
    fn replace_departure_cities(
        &self,
        destination_id: i32,
        cities: &[NewDepartureCitySummary],
    ) -> RepositoryResult<()>;
    fn replace_inclusions(
        &self,
        destination_id: i32,
        items: &[NewInclusionItem],
    ) -> RepositoryResult<()>;
}

/// Read-only operations over travel packages.
pub trait PackageReader {
    fn get_package_by_id(&self, id: i32) -> RepositoryResult<Option<TravelPackage>>;
    fn list_packages(&self, destination_id: i32) -> RepositoryResult<Vec<TravelPackage>>;
}

/// Write operations over travel packages.
pub trait PackageWriter {
    fn create_package(&self, new_package: &NewTravelPackage) -> RepositoryResult<TravelPackage>;
    fn delete_package(&self, package_id: i32, destination_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over bookings.
pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
    fn list_bookings(
        &self,
        query: BookingListQuery,
    ) -> RepositoryResult<(usize, Vec<BookingWithUser>)>;
}

/// Write operations over bookings.
pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
}

/// Read-only operations over user accounts.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user accounts.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
}
