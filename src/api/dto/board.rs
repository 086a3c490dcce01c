//! Board post and reply DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Board, BoardReply};
use crate::utils::time::format_datetime;

/// Request body for uploading a board post.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BoardUploadRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Request body for updating a board post.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BoardUpdateRequest {
    pub id: i32,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Request body for adding a reply to a board post.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BoardReplyRequest {
    pub board_id: i32,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Request body for editing a reply.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BoardReplyUpdateRequest {
    pub id: i32,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// Query parameter selecting a reply, e.g. `DELETE /board/reply?id=5`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct ReplyIdParams {
    #[validate(range(min = 1, message = "Reply id must be positive"))]
    pub id: i32,
}

/// One row of the board listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardSummaryResponse {
    pub id: i32,
    pub author_nickname: String,
    pub title: String,
    pub created_at: String,
}

impl From<Board> for BoardSummaryResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            author_nickname: board.author_nickname,
            title: board.title,
            created_at: format_datetime(board.created_at),
        }
    }
}

/// Full board post with its replies.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardDetailResponse {
    pub id: i32,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub replies: Vec<BoardReplyResponse>,
}

impl BoardDetailResponse {
    pub fn from_parts(board: Board, replies: Vec<BoardReply>) -> Self {
        Self {
            id: board.id,
            author_nickname: board.author_nickname,
            title: board.title,
            content: board.content,
            created_at: format_datetime(board.created_at),
            replies: replies.into_iter().map(BoardReplyResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BoardReplyResponse {
    pub id: i32,
    pub author_nickname: String,
    pub content: String,
    pub created_at: String,
}

impl From<BoardReply> for BoardReplyResponse {
    fn from(reply: BoardReply) -> Self {
        Self {
            id: reply.id,
            author_nickname: reply.author_nickname,
            content: reply.content,
            created_at: format_datetime(reply.created_at),
        }
    }
}
