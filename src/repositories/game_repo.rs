//! Game repository. Games are read-mostly reference data.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::Game;

#[derive(Clone)]
pub struct GameRepository {
    pool: AsyncDbPool,
}

impl GameRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, game_id: i32) -> Result<Option<Game>, AppError> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        games
            .filter(id.eq(game_id))
            .select(Game::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        games
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Game>, AppError> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        games
            .order(id.asc())
            .offset(offset)
            .limit(limit)
            .select(Game::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_by_keyword(&self, keyword: &str) -> Result<i64, AppError> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;
        let pattern = format!("%{}%", keyword);

        games
            .filter(
                name.ilike(pattern.clone())
                    .or(name_kor.ilike(pattern).assume_not_null()),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Case-insensitive substring search over both game names.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Game>, AppError> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;
        let pattern = format!("%{}%", keyword);

        games
            .filter(
                name.ilike(pattern.clone())
                    .or(name_kor.ilike(pattern).assume_not_null()),
            )
            .order(id.asc())
            .offset(offset)
            .limit(limit)
            .select(Game::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
