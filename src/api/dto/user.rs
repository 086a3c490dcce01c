//! User-related DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;

/// Request body for creating an account.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 4, max = 20, message = "Login id must be between 4 and 20 characters"))]
    #[schema(example = "alice01", min_length = 4, max_length = 20)]
    pub login_id: String,
    #[validate(length(min = 2, max = 20, message = "Nickname must be between 2 and 20 characters"))]
    #[schema(example = "Alice", min_length = 2, max_length = 20)]
    pub nickname: String,
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    #[schema(format = "password", min_length = 6, max_length = 30)]
    pub password: String,
}

/// Request body for updating profile fields.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateInfoRequest {
    #[validate(length(min = 2, max = 20, message = "Nickname must be between 2 and 20 characters"))]
    pub nickname: String,
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: Option<i32>,
    /// Free-form, e.g. "M" / "F"
    #[validate(length(max = 10, message = "Gender must be at most 10 characters"))]
    pub gender: Option<String>,
}

/// Request body for changing the password.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    /// Current password
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    #[schema(format = "password")]
    pub password: String,
    /// Password to change to
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    #[schema(format = "password")]
    pub new_password: String,
}

/// Request body for adding a game to favorites.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct FavoriteRequest {
    #[validate(range(min = 1, message = "Game id must be positive"))]
    pub game_id: i32,
}

/// Public profile fields of a user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    pub nickname: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            nickname: user.nickname,
            age: user.age,
            gender: user.gender,
        }
    }
}
