//! Service layer for business logic operations.
//!
//! Services encapsulate the existence, uniqueness and ownership rules
//! that gate every mutation, and coordinate between repositories and
//! handlers.

mod board_reply_service;
mod board_service;
mod game_question_service;
mod game_service;
mod review_service;
mod user_service;

pub use board_reply_service::BoardReplyService;
pub use board_service::BoardService;
pub use game_question_service::GameQuestionService;
pub use game_service::GameService;
pub use review_service::ReviewService;
pub use user_service::UserService;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::{Repositories, UserRepository};
use crate::utils::PasswordEncoder;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub games: GameService,
    pub reviews: ReviewService,
    pub boards: BoardService,
    pub board_replies: BoardReplyService,
    pub game_questions: GameQuestionService,
}

impl Services {
    /// Creates a new Services instance from Repositories and the shared
    /// password encoder.
    pub fn new(repos: Repositories, encoder: PasswordEncoder) -> Self {
        Self {
            users: UserService::new(
                repos.users.clone(),
                repos.reviews.clone(),
                repos.favorites.clone(),
                repos.games.clone(),
                encoder,
            ),
            games: GameService::new(repos.games.clone()),
            reviews: ReviewService::new(
                repos.reviews.clone(),
                repos.games.clone(),
                repos.users.clone(),
            ),
            boards: BoardService::new(
                repos.boards.clone(),
                repos.board_replies.clone(),
                repos.users.clone(),
            ),
            board_replies: BoardReplyService::new(
                repos.board_replies,
                repos.boards,
                repos.users.clone(),
            ),
            game_questions: GameQuestionService::new(
                repos.game_questions,
                repos.game_question_answers,
                repos.games,
                repos.users,
            ),
        }
    }
}

/// Fails with `Forbidden` unless the acting identity owns the target.
pub(crate) fn ensure_owner<T: PartialEq + ?Sized>(
    owner: &T,
    acting: &T,
    target: &str,
) -> AppResult<()> {
    if owner != acting {
        return Err(AppError::forbidden(format!(
            "Only the author can modify this {}.",
            target
        )));
    }
    Ok(())
}

/// Resolves the acting principal to an existing, non-withdrawn user.
pub(crate) async fn active_user(users: &UserRepository, login_id: &str) -> AppResult<User> {
    match users.find_by_login_id(login_id).await? {
        Some(user) if !user.is_withdraw => Ok(user),
        _ => Err(AppError::not_found("user", "login_id", login_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_passes_ownership_check() {
        assert!(ensure_owner("alice", "alice", "post").is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let result = ensure_owner("alice", "bob", "post");
        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[test]
    fn ownership_check_works_over_numeric_ids() {
        assert!(ensure_owner(&7, &7, "review").is_ok());
        assert!(matches!(
            ensure_owner(&7, &8, "review"),
            Err(AppError::Forbidden { .. })
        ));
    }
}
