use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{
    NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser,
};

/// Separator for the comma-joined roles column.
const ROLES_SEPARATOR: char = ',';

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub roles: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser<'a> {
    pub name: Option<&'a str>,
    pub roles: Option<String>,
    pub updated_at: NaiveDateTime,
}

fn join_roles(roles: &[String]) -> String {
    roles.join(&ROLES_SEPARATOR.to_string())
}

fn split_roles(roles: &str) -> Vec<String> {
    roles
        .split(ROLES_SEPARATOR)
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            roles: split_roles(&value.roles),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            password_hash: value.password_hash.as_str(),
            roles: join_roles(&value.roles),
        }
    }
}

impl<'a> From<&'a DomainUpdateUser> for UpdateUser<'a> {
    fn from(value: &'a DomainUpdateUser) -> Self {
        Self {
            name: value.name.as_deref(),
            roles: value.roles.as_deref().map(join_roles),
            updated_at: value.updated_at,
        }
    }
}
