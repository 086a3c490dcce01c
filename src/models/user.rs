use diesel::prelude::*;
use jiff_diesel::DateTime;

/// User model for reading from database.
///
/// `password` always holds the argon2 hash, never plain text.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub login_id: String,
    pub nickname: String,
    pub password: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub is_withdraw: bool,
    pub created_at: DateTime,
}

/// NewUser model for inserting new accounts.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub login_id: String,
    pub nickname: String,
    pub password: String,
}

/// Changeset for profile updates.
///
/// `treat_none_as_null` so clearing age/gender is expressible.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProfile {
    pub nickname: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
