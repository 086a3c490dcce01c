//! Board reply service.

use crate::error::{AppError, AppResult};
use crate::models::{BoardReply, NewBoardReply};
use crate::repositories::{BoardReplyRepository, BoardRepository, UserRepository};
use crate::services::{active_user, ensure_owner};

#[derive(Clone)]
pub struct BoardReplyService {
    replies: BoardReplyRepository,
    boards: BoardRepository,
    users: UserRepository,
}

impl BoardReplyService {
    pub fn new(
        replies: BoardReplyRepository,
        boards: BoardRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            replies,
            boards,
            users,
        }
    }

    /// Adds a reply to an existing post.
    pub async fn add(&self, login_id: &str, board_id: i32, content: String) -> AppResult<BoardReply> {
        let user = active_user(&self.users, login_id).await?;
        self.boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found("board post", "id", board_id))?;

        self.replies
            .create(NewBoardReply {
                board_id,
                author_id: user.login_id,
                author_nickname: user.nickname,
                content,
            })
            .await
    }

    pub async fn update(
        &self,
        login_id: &str,
        reply_id: i32,
        content: &str,
    ) -> AppResult<BoardReply> {
        let reply = self
            .replies
            .find_by_id(reply_id)
            .await?
            .ok_or_else(|| AppError::not_found("reply", "id", reply_id))?;
        ensure_owner(reply.author_id.as_str(), login_id, "reply")?;

        self.replies.update_content(reply_id, content).await
    }

    pub async fn delete(&self, login_id: &str, reply_id: i32) -> AppResult<()> {
        let reply = self
            .replies
            .find_by_id(reply_id)
            .await?
            .ok_or_else(|| AppError::not_found("reply", "id", reply_id))?;
        ensure_owner(reply.author_id.as_str(), login_id, "reply")?;

        self.replies.delete(reply_id).await?;
        Ok(())
    }
}
