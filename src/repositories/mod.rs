//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities. Each repository
//! holds the shared bb8 pool; since the pool uses `Arc` internally, cloning
//! a repository is cheap.

mod board_reply_repo;
mod board_repo;
mod favorite_repo;
mod game_question_answer_repo;
mod game_question_repo;
mod game_repo;
mod review_repo;
mod user_repo;

pub use board_reply_repo::BoardReplyRepository;
pub use board_repo::BoardRepository;
pub use favorite_repo::FavoriteRepository;
pub use game_question_answer_repo::GameQuestionAnswerRepository;
pub use game_question_repo::GameQuestionRepository;
pub use game_repo::GameRepository;
pub use review_repo::ReviewRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub games: GameRepository,
    pub reviews: ReviewRepository,
    pub favorites: FavoriteRepository,
    pub boards: BoardRepository,
    pub board_replies: BoardReplyRepository,
    pub game_questions: GameQuestionRepository,
    pub game_question_answers: GameQuestionAnswerRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            games: GameRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool.clone()),
            favorites: FavoriteRepository::new(pool.clone()),
            boards: BoardRepository::new(pool.clone()),
            board_replies: BoardReplyRepository::new(pool.clone()),
            game_questions: GameQuestionRepository::new(pool.clone()),
            game_question_answers: GameQuestionAnswerRepository::new(pool),
        }
    }
}
