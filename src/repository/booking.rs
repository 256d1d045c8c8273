use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::booking::{
    Booking as DomainBooking, BookingListQuery, BookingWithUser, NewBooking as DomainNewBooking,
};
use crate::models::booking::{
    Booking as DbBooking, NewBooking as DbNewBooking, NewParticipant as DbNewParticipant,
    Participant as DbParticipant,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingReader, BookingWriter, DieselRepository};

impl BookingReader for DieselRepository {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBooking>> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let booking = bookings::table
            .filter(bookings::id.eq(id))
            .first::<DbBooking>(&mut conn)
            .optional()?;

        match booking {
            Some(db_booking) => {
                let mut participants = load_participants_for_bookings(&mut conn, &[db_booking.id])?;
                let rows = participants.remove(&db_booking.id).unwrap_or_default();
                Ok(Some(db_booking.into_domain(rows)))
            }
            None => Ok(None),
        }
    }

    fn list_bookings(
        &self,
        query: BookingListQuery,
    ) -> RepositoryResult<(usize, Vec<BookingWithUser>)> {
        use crate::schema::{bookings, destinations, packages, users};

        let mut conn = self.conn()?;

        let mut count_query = bookings::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = query.user_id {
            count_query = count_query.filter(bookings::user_id.eq(user_id));
        }

        if let Some(destination_id) = query.destination_id {
            count_query = count_query.filter(bookings::destination_id.eq(destination_id));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = bookings::table
            .inner_join(users::table)
            .inner_join(destinations::table)
            .inner_join(packages::table)
            .select((
                DbBooking::as_select(),
                users::name,
                users::email,
                destinations::name,
                packages::name,
            ))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = query.user_id {
            items = items.filter(bookings::user_id.eq(user_id));
        }

        if let Some(destination_id) = query.destination_id {
            items = items.filter(bookings::destination_id.eq(destination_id));
        }

        items = items.order(bookings::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<(DbBooking, String, String, String, String)>(&mut conn)?;

        let booking_ids: Vec<i32> = rows.iter().map(|(booking, ..)| booking.id).collect();
        let mut participants = load_participants_for_bookings(&mut conn, &booking_ids)?;

        let listed = rows
            .into_iter()
            .map(
                |(booking, user_name, user_email, destination_name, package_name)| {
                    let booking_participants =
                        participants.remove(&booking.id).unwrap_or_default();
                    BookingWithUser {
                        booking: booking.into_domain(booking_participants),
                        user_name,
                        user_email,
                        destination_name,
                        package_name,
                    }
                },
            )
            .collect();

        Ok((total, listed))
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &DomainNewBooking) -> RepositoryResult<DomainBooking> {
        use crate::schema::{bookings, participants};

        let mut conn = self.conn()?;

        let created = conn.transaction::<DbBooking, diesel::result::Error, _>(|conn| {
            let created = diesel::insert_into(bookings::table)
                .values(DbNewBooking::from(new_booking))
                .get_result::<DbBooking>(conn)?;

            let rows: Vec<DbNewParticipant> = new_booking
                .participants
                .iter()
                .map(|participant| DbNewParticipant::from_domain(created.id, participant))
                .collect();
            diesel::insert_into(participants::table)
                .values(&rows)
                .execute(conn)?;

            Ok(created)
        })?;

        let mut participants = load_participants_for_bookings(&mut conn, &[created.id])?;
        let rows = participants.remove(&created.id).unwrap_or_default();
        Ok(created.into_domain(rows))
    }
}

fn load_participants_for_bookings(
    conn: &mut SqliteConnection,
    booking_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbParticipant>>> {
    use crate::schema::participants;

    if booking_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = participants::table
        .filter(participants::booking_id.eq_any(booking_ids))
        .order(participants::id.asc())
        .load::<DbParticipant>(conn)?;

    let mut map: HashMap<i32, Vec<DbParticipant>> = HashMap::new();
    for row in rows {
        map.entry(row.booking_id).or_default().push(row);
    }

    Ok(map)
}
