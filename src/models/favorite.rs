use diesel::prelude::*;

/// A user's bookmark of a game. The (user_login_id, game_id) pair is
/// unique; the database constraint is the final guard.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Favorite {
    pub id: i32,
    pub user_login_id: String,
    pub game_id: i32,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite {
    pub user_login_id: String,
    pub game_id: i32,
}
