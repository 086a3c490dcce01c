//! Review DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Game, Review};
use crate::utils::time::format_datetime;

/// Request body for writing a review.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ReviewUploadRequest {
    pub game_id: i32,
    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub comment: String,
    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    #[schema(minimum = 1, maximum = 10)]
    pub rating: i32,
}

/// Request body for editing a review.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ReviewUpdateRequest {
    pub id: i32,
    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub comment: String,
    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    #[schema(minimum = 1, maximum = 10)]
    pub rating: i32,
}

/// Review enriched with the game's localized name.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewDetailResponse {
    pub id: i32,
    pub user_id: i32,
    pub user_nickname: String,
    pub game_id: i32,
    pub game_name: String,
    pub game_name_kor: Option<String>,
    pub comment: String,
    pub rating: i32,
    pub created_at: String,
}

impl From<(Review, Game)> for ReviewDetailResponse {
    fn from((review, game): (Review, Game)) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            user_nickname: review.user_nickname,
            game_id: review.game_id,
            game_name: review.game_name,
            game_name_kor: game.name_kor,
            comment: review.comment,
            rating: review.rating,
            created_at: format_datetime(review.created_at),
        }
    }
}
