//! Bearer-token authentication.
//!
//! Handlers that require an acting user take an `AuthUser` argument; the
//! extractor validates the access token against the configured secret and
//! rejects with 401 before the handler runs.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{validate_access_token, Claims};

/// The authenticated principal, as carried by the access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Login id (token subject)
    pub login_id: String,
    /// Nickname at token issue time
    pub nickname: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            login_id: claims.sub,
            nickname: claims.nickname,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
        })?;

        let claims = validate_access_token(token, &state.jwt_config.secret)?;
        Ok(AuthUser::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::TokenType;

    #[test]
    fn auth_user_carries_claims_identity() {
        let claims = Claims {
            sub: "alice01".to_string(),
            nickname: "Alice".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9_999_999_999,
        };

        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.login_id, "alice01");
        assert_eq!(auth_user.nickname, "Alice");
    }
}
