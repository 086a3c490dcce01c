//! Game question answer repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{GameQuestionAnswer, NewGameQuestionAnswer};

#[derive(Clone)]
pub struct GameQuestionAnswerRepository {
    pool: AsyncDbPool,
}

impl GameQuestionAnswerRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        new_answer: NewGameQuestionAnswer,
    ) -> Result<GameQuestionAnswer, AppError> {
        use crate::schema::game_question_answers::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(game_question_answers)
            .values(&new_answer)
            .returning(GameQuestionAnswer::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(
        &self,
        answer_id: i32,
    ) -> Result<Option<GameQuestionAnswer>, AppError> {
        use crate::schema::game_question_answers::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        game_question_answers
            .filter(id.eq(answer_id))
            .select(GameQuestionAnswer::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// All answers of a question, oldest first.
    pub async fn list_by_question(
        &self,
        parent_question_id: i32,
    ) -> Result<Vec<GameQuestionAnswer>, AppError> {
        use crate::schema::game_question_answers::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        game_question_answers
            .filter(question_id.eq(parent_question_id))
            .order(created_at.asc())
            .select(GameQuestionAnswer::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update_content(
        &self,
        answer_id: i32,
        new_content: &str,
    ) -> Result<GameQuestionAnswer, AppError> {
        use crate::schema::game_question_answers::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(game_question_answers.filter(id.eq(answer_id)))
            .set(content.eq(new_content))
            .returning(GameQuestionAnswer::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, answer_id: i32) -> Result<usize, AppError> {
        use crate::schema::game_question_answers::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(game_question_answers.filter(id.eq(answer_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
