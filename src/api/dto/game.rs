//! Game reference-data DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Game;

#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    pub id: i32,
    pub name: String,
    pub name_kor: Option<String>,
    pub thumbnail: Option<String>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            name_kor: game.name_kor,
            thumbnail: game.thumbnail,
        }
    }
}
