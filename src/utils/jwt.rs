//! JWT generation and validation for the bearer-token boundary.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Token type enumeration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Access token for API authentication (short-lived)
    Access,
    /// Refresh token for obtaining new access tokens (long-lived)
    Refresh,
}

/// JWT claims carrying the acting user's identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (login id)
    pub sub: String,
    /// Nickname at the time the token was issued
    pub nickname: String,
    /// Token type (access or refresh)
    pub token_type: TokenType,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(
        login_id: String,
        nickname: String,
        token_type: TokenType,
        expiration_hours: i64,
    ) -> Self {
        let now = jiff::Timestamp::now().as_second();
        Self {
            sub: login_id,
            nickname,
            token_type,
            iat: now,
            exp: now + expiration_hours * 3600,
        }
    }
}

fn generate_token(
    login_id: String,
    nickname: String,
    token_type: TokenType,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(login_id, nickname, token_type, expiration_hours);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Generates an access/refresh token pair for a user.
pub fn generate_token_pair(
    login_id: &str,
    nickname: &str,
    secret: &str,
    access_expiration_hours: i64,
    refresh_expiration_hours: i64,
) -> AppResult<(String, String)> {
    let access = generate_token(
        login_id.to_string(),
        nickname.to_string(),
        TokenType::Access,
        secret,
        access_expiration_hours,
    )?;
    let refresh = generate_token(
        login_id.to_string(),
        nickname.to_string(),
        TokenType::Refresh,
        secret,
        refresh_expiration_hours,
    )?;
    Ok((access, refresh))
}

fn validate_token(token: &str, secret: &str, expected: TokenType) -> AppResult<Claims> {
    let validation = Validation::default();
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AppError::Unauthorized {
        message: format!("Invalid token: {}", e),
    })?;

    if data.claims.token_type != expected {
        return Err(AppError::Unauthorized {
            message: "Wrong token type".to_string(),
        });
    }
    Ok(data.claims)
}

/// Validates an access token and returns its claims.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, TokenType::Access)
}

/// Validates a refresh token and returns its claims.
pub fn validate_refresh_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, TokenType::Refresh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn token_pair_round_trips() {
        let (access, refresh) =
            generate_token_pair("alice", "Alice", SECRET, 1, 168).unwrap();

        let claims = validate_access_token(&access, SECRET).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.nickname, "Alice");

        let claims = validate_refresh_token(&refresh, SECRET).unwrap();
        assert_eq!(claims.token_type, TokenType::Refresh);
    }

    #[test]
    fn access_token_is_rejected_as_refresh_token() {
        let (access, _) = generate_token_pair("alice", "Alice", SECRET, 1, 168).unwrap();
        assert!(validate_refresh_token(&access, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let (access, _) = generate_token_pair("alice", "Alice", SECRET, 1, 168).unwrap();
        let result = validate_access_token(&access, "another_secret_that_is_also_32_chars");
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            sub: "alice".to_string(),
            nickname: "Alice".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 1,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(validate_access_token(&token, SECRET).is_err());
    }
}
