//! Game question repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{GameQuestion, NewGameQuestion, UpdateGameQuestion};

#[derive(Clone)]
pub struct GameQuestionRepository {
    pool: AsyncDbPool,
}

impl GameQuestionRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_question: NewGameQuestion) -> Result<GameQuestion, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(game_questions)
            .values(&new_question)
            .returning(GameQuestion::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, question_id: i32) -> Result<Option<GameQuestion>, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        game_questions
            .filter(id.eq(question_id))
            .select(GameQuestion::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn count_by_game(&self, target_game_id: i32) -> Result<i64, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        game_questions
            .filter(game_id.eq(target_game_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Newest questions of a game first.
    pub async fn list_by_game(
        &self,
        target_game_id: i32,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<GameQuestion>, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        game_questions
            .filter(game_id.eq(target_game_id))
            .order(created_at.desc())
            .offset(offset)
            .limit(limit)
            .select(GameQuestion::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        question_id: i32,
        update: UpdateGameQuestion,
    ) -> Result<GameQuestion, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(game_questions.filter(id.eq(question_id)))
            .set(&update)
            .returning(GameQuestion::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Answers go with the question via the cascading foreign key.
    pub async fn delete(&self, question_id: i32) -> Result<usize, AppError> {
        use crate::schema::game_questions::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::delete(game_questions.filter(id.eq(question_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
