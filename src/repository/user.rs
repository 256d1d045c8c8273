use diesel::prelude::*;

use crate::domain::user::{
    NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser,
};
use crate::models::user::{NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(users::table)
            .values(DbNewUser::from(new_user))
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user(&self, user_id: i32, updates: &DomainUpdateUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let target = users::table.filter(users::id.eq(user_id));
        let updated = diesel::update(target)
            .set(DbUpdateUser::from(updates))
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }
}
