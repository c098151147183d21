//! Diesel row types for the `users` table.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::UserDetails;

/// Row read back from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Writable columns, shared by insert and update.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserFieldsRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a UserDetails> for UserFieldsRow<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            name: details.name(),
            email: details.email(),
            address: details.address(),
        }
    }
}
