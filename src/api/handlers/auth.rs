//! Authentication handlers for login and token refresh.

use axum::extract::State;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{Envelope, LoginRequest, RefreshTokenRequest, TokenResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::{generate_token_pair, validate_refresh_token};
use crate::utils::ValidatedJson;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /login` - Authenticate and get a token pair
/// - `POST /refresh` - Exchange a refresh token for a new pair
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(refresh_token))
}

/// POST /auth/login - Authenticate user
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = Envelope<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Envelope<TokenResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.login_id, &payload.password)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        &user.login_id,
        &user.nickname,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    Ok(Envelope::ok(
        "Login successful.",
        TokenResponse {
            access_token,
            refresh_token,
        },
    ))
}

/// POST /auth/refresh - Refresh the token pair
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens refreshed", body = Envelope<TokenResponse>),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Envelope<TokenResponse>> {
    let claims = validate_refresh_token(&payload.refresh_token, &state.jwt_config.secret)?;

    // The account may have been withdrawn since the token was issued.
    let user = state.services.users.find_active(&claims.sub).await?;

    let (access_token, refresh_token) = generate_token_pair(
        &user.login_id,
        &user.nickname,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    Ok(Envelope::ok(
        "Token refreshed.",
        TokenResponse {
            access_token,
            refresh_token,
        },
    ))
}
