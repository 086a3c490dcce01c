use diesel::prelude::*;

/// Game reference data. Read-mostly, seeded out of band.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub name_kor: Option<String>,
    pub thumbnail: Option<String>,
}
