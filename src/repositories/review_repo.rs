//! Review repository. Listing queries join the game row so responses can
//! carry the localized game name without a second round trip.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Game, NewReview, Review, UpdateReview};
use crate::schema::{games, reviews};

#[derive(Clone)]
pub struct ReviewRepository {
    pool: AsyncDbPool,
}

impl ReviewRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(reviews::table)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        reviews::table
            .filter(reviews::id.eq(review_id))
            .select(Review::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn count_by_nickname(&self, nickname: &str) -> Result<i64, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        reviews::table
            .filter(reviews::user_nickname.eq(nickname))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_nickname(
        &self,
        nickname: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Review, Game)>, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        reviews::table
            .inner_join(games::table)
            .filter(reviews::user_nickname.eq(nickname))
            .order(reviews::created_at.desc())
            .offset(offset)
            .limit(limit)
            .select((Review::as_select(), Game::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_by_game(&self, game_id: i32) -> Result<i64, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        reviews::table
            .filter(reviews::game_id.eq(game_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_game(
        &self,
        game_id: i32,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<(Review, Game)>, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        reviews::table
            .inner_join(games::table)
            .filter(reviews::game_id.eq(game_id))
            .order(reviews::created_at.desc())
            .offset(offset)
            .limit(limit)
            .select((Review::as_select(), Game::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        review_id: i32,
        update: UpdateReview,
    ) -> Result<Review, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(reviews::table.filter(reviews::id.eq(review_id)))
            .set(&update)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, review_id: i32) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(reviews::table.filter(reviews::id.eq(review_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
