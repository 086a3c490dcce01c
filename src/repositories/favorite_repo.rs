//! Favorite repository. The (user, game) unique constraint is the final
//! guard against double-favoriting.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Favorite, Game, NewFavorite};
use crate::schema::{favorites, games};

#[derive(Clone)]
pub struct FavoriteRepository {
    pool: AsyncDbPool,
}

impl FavoriteRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(favorites::table)
            .values(&new_favorite)
            .returning(Favorite::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_user_and_game(
        &self,
        login_id: &str,
        game_id: i32,
    ) -> Result<Option<Favorite>, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        favorites::table
            .filter(favorites::user_login_id.eq(login_id))
            .filter(favorites::game_id.eq(game_id))
            .select(Favorite::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn count_by_user(&self, login_id: &str) -> Result<i64, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        favorites::table
            .filter(favorites::user_login_id.eq(login_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_user(
        &self,
        login_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Favorite, Game)>, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        favorites::table
            .inner_join(games::table)
            .filter(favorites::user_login_id.eq(login_id))
            .order(favorites::id.asc())
            .offset(offset)
            .limit(limit)
            .select((Favorite::as_select(), Game::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete_by_user_and_game(
        &self,
        login_id: &str,
        game_id: i32,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(
            favorites::table
                .filter(favorites::user_login_id.eq(login_id))
                .filter(favorites::game_id.eq(game_id)),
        )
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
