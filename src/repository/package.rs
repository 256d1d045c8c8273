use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::package::{
    NewTravelPackage as DomainNewTravelPackage, TravelPackage as DomainTravelPackage,
};
use crate::models::package::{
    ItineraryDay as DbItineraryDay, NewItineraryDay as DbNewItineraryDay,
    NewPackage as DbNewPackage, NewPackageDate as DbNewPackageDate, Package as DbPackage,
    PackageDate as DbPackageDate,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PackageReader, PackageWriter};

impl PackageReader for DieselRepository {
    fn get_package_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTravelPackage>> {
        use crate::schema::packages;

        let mut conn = self.conn()?;
        let package = packages::table
            .filter(packages::id.eq(id))
            .first::<DbPackage>(&mut conn)
            .optional()?;

        match package {
            Some(db_package) => {
                let assembled = assemble_packages(&mut conn, vec![db_package])?;
                Ok(assembled.into_iter().next())
            }
            None => Ok(None),
        }
    }

    fn list_packages(&self, destination_id: i32) -> RepositoryResult<Vec<DomainTravelPackage>> {
        use crate::schema::packages;

        let mut conn = self.conn()?;
        let db_packages = packages::table
            .filter(packages::destination_id.eq(destination_id))
            .order(packages::id.asc())
            .load::<DbPackage>(&mut conn)?;

        assemble_packages(&mut conn, db_packages)
    }
}

impl PackageWriter for DieselRepository {
    fn create_package(
        &self,
        new_package: &DomainNewTravelPackage,
    ) -> RepositoryResult<DomainTravelPackage> {
        use crate::schema::{itinerary_days, package_dates, packages};

        let mut conn = self.conn()?;

        let created = conn.transaction::<DbPackage, diesel::result::Error, _>(|conn| {
            let created = diesel::insert_into(packages::table)
                .values(DbNewPackage::from(new_package))
                .get_result::<DbPackage>(conn)?;

            let dates: Vec<DbNewPackageDate> = new_package
                .available_dates
                .iter()
                .enumerate()
                .map(|(position, label)| {
                    DbNewPackageDate::from_label(created.id, position as i32, label)
                })
                .collect();
            diesel::insert_into(package_dates::table)
                .values(&dates)
                .execute(conn)?;

            let itinerary: Vec<DbNewItineraryDay> = new_package
                .itinerary
                .iter()
                .map(|day| DbNewItineraryDay::from_domain(created.id, day))
                .collect();
            diesel::insert_into(itinerary_days::table)
                .values(&itinerary)
                .execute(conn)?;

            Ok(created)
        })?;

        let assembled = assemble_packages(&mut conn, vec![created])?;
        assembled
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_package(&self, package_id: i32, destination_id: i32) -> RepositoryResult<()> {
        use crate::schema::packages;

        let mut conn = self.conn()?;

        let target = packages::table
            .filter(packages::id.eq(package_id))
            .filter(packages::destination_id.eq(destination_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Load the owned children for `db_packages` and convert to domain values,
/// preserving the input order.
pub(crate) fn assemble_packages(
    conn: &mut SqliteConnection,
    db_packages: Vec<DbPackage>,
) -> RepositoryResult<Vec<DomainTravelPackage>> {
    if db_packages.is_empty() {
        return Ok(Vec::new());
    }

    let package_ids: Vec<i32> = db_packages.iter().map(|package| package.id).collect();
    let mut dates = load_dates_for_packages(conn, &package_ids)?;
    let mut itineraries = load_itinerary_for_packages(conn, &package_ids)?;

    Ok(db_packages
        .into_iter()
        .map(|package| {
            let package_dates = dates.remove(&package.id).unwrap_or_default();
            let itinerary = itineraries.remove(&package.id).unwrap_or_default();
            package.into_domain(package_dates, itinerary)
        })
        .collect())
}

/// Load all packages belonging to `destination_ids`, grouped by destination.
pub(crate) fn load_packages_for_destinations(
    conn: &mut SqliteConnection,
    destination_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTravelPackage>>> {
    use crate::schema::packages;

    if destination_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let db_packages = packages::table
        .filter(packages::destination_id.eq_any(destination_ids))
        .order(packages::id.asc())
        .load::<DbPackage>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTravelPackage>> = HashMap::new();
    for package in assemble_packages(conn, db_packages)? {
        map.entry(package.destination_id).or_default().push(package);
    }

    Ok(map)
}

fn load_dates_for_packages(
    conn: &mut SqliteConnection,
    package_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbPackageDate>>> {
    use crate::schema::package_dates;

    let rows = package_dates::table
        .filter(package_dates::package_id.eq_any(package_ids))
        .order(package_dates::position.asc())
        .load::<DbPackageDate>(conn)?;

    let mut map: HashMap<i32, Vec<DbPackageDate>> = HashMap::new();
    for row in rows {
        map.entry(row.package_id).or_default().push(row);
    }

    Ok(map)
}

fn load_itinerary_for_packages(
    conn: &mut SqliteConnection,
    package_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbItineraryDay>>> {
    use crate::schema::itinerary_days;

    let rows = itinerary_days::table
        .filter(itinerary_days::package_id.eq_any(package_ids))
        .order(itinerary_days::day_number.asc())
        .load::<DbItineraryDay>(conn)?;

    let mut map: HashMap<i32, Vec<DbItineraryDay>> = HashMap::new();
    for row in rows {
        map.entry(row.package_id).or_default().push(row);
    }

    Ok(map)
}
