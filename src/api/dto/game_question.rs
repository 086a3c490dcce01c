//! Game question and answer DTOs. Same shape as board posts and replies,
//! scoped to a specific game.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{GameQuestion, GameQuestionAnswer};
use crate::utils::time::format_datetime;

/// Request body for asking a question about a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct QuestionUploadRequest {
    pub game_id: i32,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Request body for editing a question.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct QuestionUpdateRequest {
    pub id: i32,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Query parameters for listing the questions of a game.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct QuestionListParams {
    #[validate(range(min = 1, message = "Game id must be positive"))]
    pub game_id: i32,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    #[serde(default = "default_page_size", rename = "pagesize")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl QuestionListParams {
    pub fn page_params(&self) -> super::PageParams {
        super::PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Request body for answering a question.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AnswerRequest {
    pub question_id: i32,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Request body for editing an answer.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AnswerUpdateRequest {
    pub id: i32,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Query parameter selecting an answer, e.g. `DELETE /question/answer?id=5`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct AnswerIdParams {
    #[validate(range(min = 1, message = "Answer id must be positive"))]
    pub id: i32,
}

/// One row of a game's question listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummaryResponse {
    pub id: i32,
    pub game_id: i32,
    pub author_nickname: String,
    pub title: String,
    pub created_at: String,
}

impl From<GameQuestion> for QuestionSummaryResponse {
    fn from(question: GameQuestion) -> Self {
        Self {
            id: question.id,
            game_id: question.game_id,
            author_nickname: question.author_nickname,
            title: question.title,
            created_at: format_datetime(question.created_at),
        }
    }
}

/// Full question with its answers.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionDetailResponse {
    pub id: i32,
    pub game_id: i32,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub answers: Vec<AnswerResponse>,
}

impl QuestionDetailResponse {
    pub fn from_parts(question: GameQuestion, answers: Vec<GameQuestionAnswer>) -> Self {
        Self {
            id: question.id,
            game_id: question.game_id,
            author_nickname: question.author_nickname,
            title: question.title,
            content: question.content,
            created_at: format_datetime(question.created_at),
            answers: answers.into_iter().map(AnswerResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResponse {
    pub id: i32,
    pub author_nickname: String,
    pub content: String,
    pub created_at: String,
}

impl From<GameQuestionAnswer> for AnswerResponse {
    fn from(answer: GameQuestionAnswer) -> Self {
        Self {
            id: answer.id,
            author_nickname: answer.author_nickname,
            content: answer.content,
            created_at: format_datetime(answer.created_at),
        }
    }
}
