//! Board post repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Board, NewBoard, UpdateBoard};

#[derive(Clone)]
pub struct BoardRepository {
    pool: AsyncDbPool,
}

impl BoardRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_board: NewBoard) -> Result<Board, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(boards)
            .values(&new_board)
            .returning(Board::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, board_id: i32) -> Result<Option<Board>, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        boards
            .filter(id.eq(board_id))
            .select(Board::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        boards
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Newest posts first.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Board>, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        boards
            .order(created_at.desc())
            .offset(offset)
            .limit(limit)
            .select(Board::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_by_keyword(&self, keyword: &str) -> Result<i64, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;
        let pattern = format!("%{}%", keyword);

        boards
            .filter(title.ilike(pattern.clone()).or(content.ilike(pattern)))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Case-insensitive substring search over title and content.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Board>, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;
        let pattern = format!("%{}%", keyword);

        boards
            .filter(title.ilike(pattern.clone()).or(content.ilike(pattern)))
            .order(created_at.desc())
            .offset(offset)
            .limit(limit)
            .select(Board::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(&self, board_id: i32, update: UpdateBoard) -> Result<Board, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(boards.filter(id.eq(board_id)))
            .set(&update)
            .returning(Board::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Replies go with the post via the cascading foreign key.
    pub async fn delete(&self, board_id: i32) -> Result<usize, AppError> {
        use crate::schema::boards::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(boards.filter(id.eq(board_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
