use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Question scoped to a specific game. Same shape as a board post
/// plus the game reference.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::game_questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameQuestion {
    pub id: i32,
    pub game_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::game_questions)]
pub struct NewGameQuestion {
    pub game_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::game_questions)]
pub struct UpdateGameQuestion {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::game_question_answers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameQuestionAnswer {
    pub id: i32,
    pub question_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::game_question_answers)]
pub struct NewGameQuestionAnswer {
    pub question_id: i32,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
}
