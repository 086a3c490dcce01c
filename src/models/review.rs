use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Game review. `user_nickname` and `game_name` are denormalized so
/// review listings do not need a user join.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub user_nickname: String,
    pub game_id: i32,
    pub game_name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub user_id: i32,
    pub user_nickname: String,
    pub game_id: i32,
    pub game_name: String,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::reviews)]
pub struct UpdateReview {
    pub comment: String,
    pub rating: i32,
}
