use diesel::prelude::*;
use jiff_diesel::DateTime;

/// General board question post.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Board {
    pub id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::boards)]
pub struct NewBoard {
    pub author_id: String,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::boards)]
pub struct UpdateBoard {
    pub title: String,
    pub content: String,
}

/// Reply to a board post. Deleted together with its parent post.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::board_replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardReply {
    pub id: i32,
    pub board_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::board_replies)]
pub struct NewBoardReply {
    pub board_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
}
