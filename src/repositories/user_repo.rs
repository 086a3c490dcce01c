//! User repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, UpdateProfile, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new account. A concurrent duplicate surfaces as a unique
    /// violation, converted to `AppError::Duplicate`.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_login_id(&self, user_login_id: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        users
            .filter(login_id.eq(user_login_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_nickname(&self, user_nickname: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        users
            .filter(nickname.eq(user_nickname))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn update_profile(
        &self,
        user_login_id: &str,
        update: UpdateProfile,
    ) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(users.filter(login_id.eq(user_login_id)))
            .set(&update)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update_password(
        &self,
        user_login_id: &str,
        password_hash: &str,
    ) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(users.filter(login_id.eq(user_login_id)))
            .set(password.eq(password_hash))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Soft-deletes the account by raising the withdrawal flag.
    pub async fn withdraw(&self, user_login_id: &str) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await.map_err(AppError::pool)?;

        diesel::update(users.filter(login_id.eq(user_login_id)))
            .set(is_withdraw.eq(true))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
