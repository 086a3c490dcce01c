//! Board reply repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{BoardReply, NewBoardReply};

#[derive(Clone)]
pub struct BoardReplyRepository {
    pool: AsyncDbPool,
}

impl BoardReplyRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_reply: NewBoardReply) -> Result<BoardReply, AppError> {
        use crate::schema::board_replies::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(board_replies)
            .values(&new_reply)
            .returning(BoardReply::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, reply_id: i32) -> Result<Option<BoardReply>, AppError> {
        use crate::schema::board_replies::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        board_replies
            .filter(id.eq(reply_id))
            .select(BoardReply::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// All replies of a post, oldest first.
    pub async fn list_by_board(&self, parent_board_id: i32) -> Result<Vec<BoardReply>, AppError> {
        use crate::schema::board_replies::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        board_replies
            .filter(board_id.eq(parent_board_id))
            .order(created_at.asc())
            .select(BoardReply::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update_content(
        &self,
        reply_id: i32,
        new_content: &str,
    ) -> Result<BoardReply, AppError> {
        use crate::schema::board_replies::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(board_replies.filter(id.eq(reply_id)))
            .set(content.eq(new_content))
            .returning(BoardReply::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, reply_id: i32) -> Result<usize, AppError> {
        use crate::schema::board_replies::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(board_replies.filter(id.eq(reply_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
