//! Game service: read-only access to the game catalogue.

use crate::error::{AppError, AppResult};
use crate::models::Game;
use crate::repositories::GameRepository;

#[derive(Clone)]
pub struct GameService {
    games: GameRepository,
}

impl GameService {
    pub fn new(games: GameRepository) -> Self {
        Self { games }
    }

    pub async fn get_game(&self, game_id: i32) -> AppResult<Game> {
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Game>, i64)> {
        let total = self.games.count_all().await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.games.list(offset, limit).await?;
        Ok((items, total))
    }

    pub async fn search(
        &self,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Game>, i64)> {
        let total = self.games.count_by_keyword(keyword).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.games.search_by_keyword(keyword, offset, limit).await?;
        Ok((items, total))
    }
}
