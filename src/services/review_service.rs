//! Review service.

use crate::error::{AppError, AppResult};
use crate::models::{Game, NewReview, Review, UpdateReview};
use crate::repositories::{GameRepository, ReviewRepository, UserRepository};
use crate::services::{active_user, ensure_owner};

#[derive(Clone)]
pub struct ReviewService {
    reviews: ReviewRepository,
    games: GameRepository,
    users: UserRepository,
}

impl ReviewService {
    pub fn new(reviews: ReviewRepository, games: GameRepository, users: UserRepository) -> Self {
        Self {
            reviews,
            games,
            users,
        }
    }

    /// Writes a review for an existing game. The game name and author
    /// nickname are denormalized into the row at write time.
    pub async fn upload(
        &self,
        login_id: &str,
        game_id: i32,
        comment: String,
        rating: i32,
    ) -> AppResult<(Review, Game)> {
        let user = active_user(&self.users, login_id).await?;
        let game = self
            .games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))?;

        let review = self
            .reviews
            .create(NewReview {
                user_id: user.id,
                user_nickname: user.nickname,
                game_id: game.id,
                game_name: game.name.clone(),
                comment,
                rating,
            })
            .await?;
        Ok((review, game))
    }

    pub async fn update(
        &self,
        login_id: &str,
        review_id: i32,
        comment: String,
        rating: i32,
    ) -> AppResult<Review> {
        let user = active_user(&self.users, login_id).await?;
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found("review", "id", review_id))?;
        ensure_owner(&review.user_id, &user.id, "review")?;

        self.reviews
            .update(review_id, UpdateReview { comment, rating })
            .await
    }

    pub async fn delete(&self, login_id: &str, review_id: i32) -> AppResult<()> {
        let user = active_user(&self.users, login_id).await?;
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found("review", "id", review_id))?;
        ensure_owner(&review.user_id, &user.id, "review")?;

        self.reviews.delete(review_id).await?;
        Ok(())
    }

    /// Reviews of a game, newest first.
    pub async fn list_by_game(
        &self,
        game_id: i32,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<(Review, Game)>, i64)> {
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))?;

        let total = self.reviews.count_by_game(game_id).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.reviews.list_by_game(game_id, offset, limit).await?;
        Ok((items, total))
    }
}
