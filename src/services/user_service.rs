//! User service: accounts, profiles, and favorites.

use crate::error::{AppError, AppResult};
use crate::models::{Favorite, Game, NewFavorite, NewUser, Review, UpdateProfile, User};
use crate::repositories::{
    FavoriteRepository, GameRepository, ReviewRepository, UserRepository,
};
use crate::services::active_user;
use crate::utils::PasswordEncoder;

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
    reviews: ReviewRepository,
    favorites: FavoriteRepository,
    games: GameRepository,
    encoder: PasswordEncoder,
}

impl UserService {
    pub fn new(
        users: UserRepository,
        reviews: ReviewRepository,
        favorites: FavoriteRepository,
        games: GameRepository,
        encoder: PasswordEncoder,
    ) -> Self {
        Self {
            users,
            reviews,
            favorites,
            games,
            encoder,
        }
    }

    /// Creates an account. Login id and nickname must both be unused; the
    /// pre-checks give a precise message and the database unique
    /// constraints close the race window.
    pub async fn sign_up(&self, login_id: &str, nickname: &str, password: &str) -> AppResult<()> {
        if self.users.find_by_login_id(login_id).await?.is_some() {
            return Err(AppError::duplicate("user", "login_id", login_id));
        }
        if self.users.find_by_nickname(nickname).await?.is_some() {
            return Err(AppError::duplicate("user", "nickname", nickname));
        }

        let new_user = NewUser {
            login_id: login_id.to_string(),
            nickname: nickname.to_string(),
            password: self.encoder.hash(password)?,
        };
        self.users.create(new_user).await?;
        Ok(())
    }

    /// Checks credentials for login. All failure modes collapse into one
    /// `Unauthorized` so callers cannot probe which login ids exist.
    pub async fn authenticate(&self, login_id: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::unauthorized("Invalid login id or password");

        let user = self
            .users
            .find_by_login_id(login_id)
            .await?
            .ok_or_else(invalid)?;
        if user.is_withdraw || !self.encoder.verify(password, &user.password)? {
            return Err(invalid());
        }
        Ok(user)
    }

    /// Updates nickname, age and gender. The nickname may stay the same,
    /// but must not belong to anyone else.
    pub async fn update_info(&self, login_id: &str, update: UpdateProfile) -> AppResult<()> {
        let user = active_user(&self.users, login_id).await?;

        if let Some(existing) = self.users.find_by_nickname(&update.nickname).await? {
            if existing.login_id != user.login_id {
                return Err(AppError::duplicate("user", "nickname", &update.nickname));
            }
        }

        self.users.update_profile(login_id, update).await?;
        Ok(())
    }

    /// Changes the password after verifying the current one.
    pub async fn change_password(
        &self,
        login_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = active_user(&self.users, login_id).await?;

        if !self.encoder.verify(current_password, &user.password)? {
            return Err(AppError::forbidden("Password does not match."));
        }

        let new_hash = self.encoder.hash(new_password)?;
        self.users.update_password(login_id, &new_hash).await?;
        Ok(())
    }

    /// Soft-deletes the account. A second withdrawal finds no active user
    /// and fails with `NotFound`.
    pub async fn withdraw(&self, login_id: &str) -> AppResult<()> {
        active_user(&self.users, login_id).await?;
        self.users.withdraw(login_id).await?;
        Ok(())
    }

    /// The acting principal as an existing, non-withdrawn user.
    pub async fn find_active(&self, login_id: &str) -> AppResult<User> {
        active_user(&self.users, login_id).await
    }

    /// Public profile of an active user.
    pub async fn get_profile(&self, nickname: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| AppError::not_found("user", "nickname", nickname))?;
        if user.is_withdraw {
            return Err(AppError::bad_request("This account has been withdrawn."));
        }
        Ok(user)
    }

    /// Reviews written by a user, newest first, with the game row joined in.
    pub async fn reviews_by_nickname(
        &self,
        nickname: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<(Review, Game)>, i64)> {
        self.get_profile(nickname).await?;

        let total = self.reviews.count_by_nickname(nickname).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self.reviews.list_by_nickname(nickname, offset, limit).await?;
        Ok((items, total))
    }

    /// Favorite games of a user, in the order they were added.
    pub async fn favorites_by_nickname(
        &self,
        nickname: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<(Favorite, Game)>, i64)> {
        let user = self.get_profile(nickname).await?;

        let total = self.favorites.count_by_user(&user.login_id).await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }
        let items = self
            .favorites
            .list_by_user(&user.login_id, offset, limit)
            .await?;
        Ok((items, total))
    }

    /// Bookmarks a game. A game can be favorited at most once per user.
    pub async fn add_favorite(&self, login_id: &str, game_id: i32) -> AppResult<()> {
        let user = active_user(&self.users, login_id).await?;
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("game", "id", game_id))?;

        if self
            .favorites
            .find_by_user_and_game(&user.login_id, game_id)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate("favorite", "game_id", game_id));
        }

        self.favorites
            .create(NewFavorite {
                user_login_id: user.login_id,
                game_id,
            })
            .await?;
        Ok(())
    }

    /// Removes a bookmark. Removing twice fails with `NotFound`.
    pub async fn remove_favorite(&self, login_id: &str, game_id: i32) -> AppResult<()> {
        let user = active_user(&self.users, login_id).await?;
        let deleted = self
            .favorites
            .delete_by_user_and_game(&user.login_id, game_id)
            .await?;
        if deleted == 0 {
            return Err(AppError::not_found("favorite", "game_id", game_id));
        }
        Ok(())
    }
}
