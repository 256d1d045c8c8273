use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::destination::{
    Destination as DomainDestination, DestinationListQuery,
    NewAttraction as DomainNewAttraction,
    NewDepartureCitySummary as DomainNewDepartureCitySummary,
    NewDestination as DomainNewDestination, NewInclusionItem as DomainNewInclusionItem,
    UpdateDestination as DomainUpdateDestination,
};
use crate::models::destination::{
    Attraction as DbAttraction, DepartureCity as DbDepartureCity, Destination as DbDestination,
    InclusionItem as DbInclusionItem, NewAttraction as DbNewAttraction,
    NewDepartureCity as DbNewDepartureCity, NewDestination as DbNewDestination,
    NewInclusionItem as DbNewInclusionItem, UpdateDestination as DbUpdateDestination,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::package::load_packages_for_destinations;
use crate::repository::{DestinationReader, DestinationWriter, DieselRepository};

impl DestinationReader for DieselRepository {
    fn get_destination_by_id(&self, id: i32) -> RepositoryResult<Option<DomainDestination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let destination = destinations::table
            .filter(destinations::id.eq(id))
            .first::<DbDestination>(&mut conn)
            .optional()?;

        match destination {
            Some(row) => Ok(assemble_destinations(&mut conn, vec![row])?.into_iter().next()),
            None => Ok(None),
        }
    }

    fn get_destination_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainDestination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let destination = destinations::table
            .filter(destinations::slug.eq(slug))
            .first::<DbDestination>(&mut conn)
            .optional()?;

        match destination {
            Some(row) => Ok(assemble_destinations(&mut conn, vec![row])?.into_iter().next()),
            None => Ok(None),
        }
    }

    fn list_destinations(
        &self,
        query: DestinationListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainDestination>)> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let mut count_query = destinations::table.into_boxed::<diesel::sqlite::Sqlite>();

        if !query.include_unpublished {
            count_query = count_query.filter(destinations::is_published.eq(true));
        }

        if let Some(category) = query.category {
            count_query = count_query.filter(destinations::category.eq(category.as_str()));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(
                destinations::name
                    .like(pattern.clone())
                    .or(destinations::long_description.like(pattern)),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = destinations::table.into_boxed::<diesel::sqlite::Sqlite>();

        if !query.include_unpublished {
            items = items.filter(destinations::is_published.eq(true));
        }

        if let Some(category) = query.category {
            items = items.filter(destinations::category.eq(category.as_str()));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(
                destinations::name
                    .like(pattern.clone())
                    .or(destinations::long_description.like(pattern)),
            );
        }

        items = items.order(destinations::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbDestination>(&mut conn)?;
        let assembled = assemble_destinations(&mut conn, rows)?;

        Ok((total, assembled))
    }
}

impl DestinationWriter for DieselRepository {
    fn create_destination(
        &self,
        new_destination: &DomainNewDestination,
    ) -> RepositoryResult<DomainDestination> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(destinations::table)
            .values(DbNewDestination::from(new_destination))
            .get_result::<DbDestination>(&mut conn)?;

        assemble_destinations(&mut conn, vec![created])?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)
    }

    fn update_destination(
        &self,
        destination_id: i32,
        updates: &DomainUpdateDestination,
    ) -> RepositoryResult<DomainDestination> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let target = destinations::table.filter(destinations::id.eq(destination_id));
        let updated = diesel::update(target)
            .set(DbUpdateDestination::from(updates))
            .get_result::<DbDestination>(&mut conn)?;

        assemble_destinations(&mut conn, vec![updated])?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_destination(&self, destination_id: i32) -> RepositoryResult<()> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let target = destinations::table.filter(destinations::id.eq(destination_id));
        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn replace_attractions(
        &self,
        destination_id: i32,
        attractions: &[DomainNewAttraction],
    ) -> RepositoryResult<()> {
        use crate::schema::attractions;

        let mut conn = self.conn()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                attractions::table.filter(attractions::destination_id.eq(destination_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewAttraction> = attractions
                .iter()
                .enumerate()
                .map(|(position, attraction)| {
                    DbNewAttraction::from_domain(destination_id, position as i32, attraction)
                })
                .collect();
            diesel::insert_into(attractions::table)
                .values(&rows)
                .execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }

    fn replace_departure_cities(
        &self,
        destination_id: i32,
        cities: &[DomainNewDepartureCitySummary],
    ) -> RepositoryResult<()> {
        use crate::schema::departure_cities;

        let mut conn = self.conn()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                departure_cities::table
                    .filter(departure_cities::destination_id.eq(destination_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewDepartureCity> = cities
                .iter()
                .enumerate()
                .map(|(position, city)| {
                    DbNewDepartureCity::from_domain(destination_id, position as i32, city)
                })
                .collect();
            diesel::insert_into(departure_cities::table)
                .values(&rows)
                .execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }

    fn replace_inclusions(
        &self,
        destination_id: i32,
        items: &[DomainNewInclusionItem],
    ) -> RepositoryResult<()> {
        use crate::schema::inclusion_items;

        let mut conn = self.conn()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(
                inclusion_items::table
                    .filter(inclusion_items::destination_id.eq(destination_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewInclusionItem> = items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    DbNewInclusionItem::from_domain(destination_id, position as i32, item)
                })
                .collect();
            diesel::insert_into(inclusion_items::table)
                .values(&rows)
                .execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }
}

/// Load the owned lists for `rows` and convert to domain values, preserving
/// the input order.
fn assemble_destinations(
    conn: &mut SqliteConnection,
    rows: Vec<DbDestination>,
) -> RepositoryResult<Vec<DomainDestination>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|destination| destination.id).collect();
    let mut inclusions = load_inclusions(conn, &ids)?;
    let mut attractions = load_attractions(conn, &ids)?;
    let mut cities = load_departure_cities(conn, &ids)?;
    let mut packages = load_packages_for_destinations(conn, &ids)?;

    Ok(rows
        .into_iter()
        .map(|destination| {
            let id = destination.id;
            destination.into_domain(
                inclusions.remove(&id).unwrap_or_default(),
                attractions.remove(&id).unwrap_or_default(),
                cities.remove(&id).unwrap_or_default(),
                packages.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

fn load_inclusions(
    conn: &mut SqliteConnection,
    destination_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbInclusionItem>>> {
    use crate::schema::inclusion_items;

    let rows = inclusion_items::table
        .filter(inclusion_items::destination_id.eq_any(destination_ids))
        .order(inclusion_items::position.asc())
        .load::<DbInclusionItem>(conn)?;

    let mut map: HashMap<i32, Vec<DbInclusionItem>> = HashMap::new();
    for row in rows {
        map.entry(row.destination_id).or_default().push(row);
    }

    Ok(map)
}

fn load_attractions(
    conn: &mut SqliteConnection,
    destination_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbAttraction>>> {
    use crate::schema::attractions;

    let rows = attractions::table
        .filter(attractions::destination_id.eq_any(destination_ids))
        .order(attractions::position.asc())
        .load::<DbAttraction>(conn)?;

    let mut map: HashMap<i32, Vec<DbAttraction>> = HashMap::new();
    for row in rows {
        map.entry(row.destination_id).or_default().push(row);
    }

    Ok(map)
}

fn load_departure_cities(
    conn: &mut SqliteConnection,
    destination_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbDepartureCity>>> {
    use crate::schema::departure_cities;

    let rows = departure_cities::table
        .filter(departure_cities::destination_id.eq_any(destination_ids))
        .order(departure_cities::position.asc())
        .load::<DbDepartureCity>(conn)?;

    let mut map: HashMap<i32, Vec<DbDepartureCity>> = HashMap::new();
    for row in rows {
        map.entry(row.destination_id).or_default().push(row);
    }

    Ok(map)
}
