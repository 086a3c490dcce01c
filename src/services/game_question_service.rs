//! Game question service. Questions and answers follow the same rules as
//! board posts and replies, scoped to a game.

use crate::error::{AppError, AppResult};
use crate::models::{
    GameQuestion, GameQuestionAnswer, NewGameQuestion, NewGameQuestionAnswer, UpdateGameQuestion,
};
use crate::repositories::{
    GameQuestionAnswerRepository, GameQuestionRepository, GameRepository, UserRepository,
};
use crate::services::{active_user, ensure_owner};

#[derive(Clone)]
pub struct GameQuestionService {
    questions: GameQuestionRepository,
    answers: GameQuestionAnswerRepository,
    games: GameRepository,
    users: UserRepository,
}

impl GameQuestionService {
    pub fn new(
        questions: GameQuestionRepository,
        answers: GameQuestionAnswerRepository,
        games: GameRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            questions,
            answers,
            games,
            users,
        }
    }

    pub async fn upload(
        &self,
        login_id: &str,
        game_id: i32,
        title: String,
        content: String,
    ) -> AppResult<GameQuestion> {
        let user = active_user(&self.users, login_id).await?;
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))?;

        self.questions
            .create(NewGameQuestion {
                game_id,
                author_id: user.login_id,
                author_nickname: user.nickname,
                title,
                content,
            })
            .await
    }

    /// The question together with its answers.
    pub async fn get_detail(
        &self,
        question_id: i32,
    ) -> AppResult<(GameQuestion, Vec<GameQuestionAnswer>)> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("question", "id", question_id))?;
        let answers = self.answers.list_by_question(question_id).await?;
        Ok((question, answers))
    }

    pub async fn list_by_game(
        &self,
        game_id: i32,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<GameQuestion>, i64)> {
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))?;

        let total = self.questions.count_by_game(game_id).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.questions.list_by_game(game_id, offset, limit).await?;
        Ok((items, total))
    }

    pub async fn update(
        &self,
        login_id: &str,
        question_id: i32,
        title: String,
        content: String,
    ) -> AppResult<GameQuestion> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("question", "id", question_id))?;
        ensure_owner(question.author_id.as_str(), login_id, "question")?;

        self.questions
            .update(question_id, UpdateGameQuestion { title, content })
            .await
    }

    pub async fn delete(&self, login_id: &str, question_id: i32) -> AppResult<()> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("question", "id", question_id))?;
        ensure_owner(question.author_id.as_str(), login_id, "question")?;

        self.questions.delete(question_id).await?;
        Ok(())
    }

    pub async fn add_answer(
        &self,
        login_id: &str,
        question_id: i32,
        content: String,
    ) -> AppResult<GameQuestionAnswer> {
        let user = active_user(&self.users, login_id).await?;
        self.questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("question", "id", question_id))?;

        self.answers
            .create(NewGameQuestionAnswer {
                question_id,
                author_id: user.login_id,
                author_nickname: user.nickname,
                content,
            })
            .await
    }

    pub async fn update_answer(
        &self,
        login_id: &str,
        answer_id: i32,
        content: &str,
    ) -> AppResult<GameQuestionAnswer> {
        let answer = self
            .answers
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| AppError::not_found("answer", "id", answer_id))?;
        ensure_owner(answer.author_id.as_str(), login_id, "answer")?;

        self.answers.update_content(answer_id, content).await
    }

    pub async fn delete_answer(&self, login_id: &str, answer_id: i32) -> AppResult<()> {
        let answer = self
            .answers
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| AppError::not_found("answer", "id", answer_id))?;
        ensure_owner(answer.author_id.as_str(), login_id, "answer")?;

        self.answers.delete(answer_id).await?;
        Ok(())
    }
}
