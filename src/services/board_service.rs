//! Board service: upload, read, list/search, update and delete of general
//! question posts.

use crate::error::{AppError, AppResult};
use crate::models::{Board, BoardReply, NewBoard, UpdateBoard};
use crate::repositories::{BoardReplyRepository, BoardRepository, UserRepository};
use crate::services::{active_user, ensure_owner};

#[derive(Clone)]
pub struct BoardService {
    boards: BoardRepository,
    replies: BoardReplyRepository,
    users: UserRepository,
}

impl BoardService {
    pub fn new(
        boards: BoardRepository,
        replies: BoardReplyRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            boards,
            replies,
            users,
        }
    }

    pub async fn upload(&self, login_id: &str, title: String, content: String) -> AppResult<Board> {
        let user = active_user(&self.users, login_id).await?;
        self.boards
            .create(NewBoard {
                author_id: user.login_id,
                author_nickname: user.nickname,
                title,
                content,
            })
            .await
    }

    /// The post together with its replies.
    pub async fn get_detail(&self, board_id: i32) -> AppResult<(Board, Vec<BoardReply>)> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found("board post", "id", board_id))?;
        let replies = self.replies.list_by_board(board_id).await?;
        Ok((board, replies))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Board>, i64)> {
        let total = self.boards.count_all().await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.boards.list(offset, limit).await?;
        Ok((items, total))
    }

    pub async fn search(
        &self,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Board>, i64)> {
        let total = self.boards.count_by_keyword(keyword).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.boards.search_by_keyword(keyword, offset, limit).await?;
        Ok((items, total))
    }

    pub async fn update(
        &self,
        login_id: &str,
        board_id: i32,
        title: String,
        content: String,
    ) -> AppResult<Board> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found("board post", "id", board_id))?;
        ensure_owner(board.author_id.as_str(), login_id, "post")?;

        self.boards
            .update(board_id, UpdateBoard { title, content })
            .await
    }

    pub async fn delete(&self, login_id: &str, board_id: i32) -> AppResult<()> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::not_found("board post", "id", board_id))?;
        ensure_owner(board.author_id.as_str(), login_id, "post")?;

        self.boards.delete(board_id).await?;
        Ok(())
    }
}
