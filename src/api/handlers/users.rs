//! User handlers: account lifecycle, profile reads, and favorites.

use axum::extract::{Path, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    ChangePasswordRequest, Envelope, FavoriteRequest, GameResponse, Page, PageParams,
    ReviewDetailResponse, SignUpRequest, UpdateInfoRequest, UserProfileResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::UpdateProfile;
use crate::state::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};

/// Creates the user routes
///
/// # Routes
/// - `POST /signup` - Create an account
/// - `PUT /info` - Update profile fields
/// - `PUT /password` - Change password
/// - `DELETE /` - Withdraw the account
/// - `GET /profile/{nickname}` - Public profile
/// - `GET /{nickname}/reviews` - Reviews written by a user
/// - `GET /{nickname}/favorites` - Favorite games of a user
/// - `POST /favorite` - Add a favorite
/// - `DELETE /favorite/{game_id}` - Remove a favorite
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(sign_up))
        .routes(routes!(update_info))
        .routes(routes!(change_password))
        .routes(routes!(withdraw))
        .routes(routes!(get_profile))
        .routes(routes!(list_reviews))
        .routes(routes!(list_favorites))
        .routes(routes!(add_favorite))
        .routes(routes!(remove_favorite))
}

/// POST /user/signup - Create an account
#[utoipa::path(
    post,
    path = "/signup",
    tag = USER_TAG,
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Login id or nickname already taken")
    )
)]
async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .users
        .sign_up(&payload.login_id, &payload.nickname, &payload.password)
        .await?;
    Ok(Envelope::message("Sign-up completed."))
}

/// PUT /user/info - Update profile fields
#[utoipa::path(
    put,
    path = "/info",
    tag = USER_TAG,
    request_body = UpdateInfoRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Nickname already taken")
    ),
    security(("bearerAuth" = []))
)]
async fn update_info(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<UpdateInfoRequest>,
) -> AppResult<Envelope<()>> {
    let update = UpdateProfile {
        nickname: payload.nickname,
        age: payload.age,
        gender: payload.gender,
    };
    state
        .services
        .users
        .update_info(&auth.login_id, update)
        .await?;
    Ok(Envelope::message("Profile updated."))
}

/// PUT /user/password - Change password
#[utoipa::path(
    put,
    path = "/password",
    tag = USER_TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Current password does not match")
    ),
    security(("bearerAuth" = []))
)]
async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .users
        .change_password(&auth.login_id, &payload.password, &payload.new_password)
        .await?;
    Ok(Envelope::message("Password changed."))
}

/// DELETE /user - Withdraw the account
#[utoipa::path(
    delete,
    path = "/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account withdrawn"),
        (status = 400, description = "Account does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn withdraw(State(state): State<AppState>, auth: AuthUser) -> AppResult<Envelope<()>> {
    state.services.users.withdraw(&auth.login_id).await?;
    Ok(Envelope::message("Withdrawal completed."))
}

/// GET /user/profile/{nickname} - Public profile
#[utoipa::path(
    get,
    path = "/profile/{nickname}",
    tag = USER_TAG,
    params(("nickname" = String, Path, description = "Nickname of the user")),
    responses(
        (status = 200, description = "Profile fields", body = Envelope<UserProfileResponse>),
        (status = 400, description = "User does not exist or has withdrawn")
    )
)]
async fn get_profile(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> AppResult<Envelope<UserProfileResponse>> {
    let user = state.services.users.get_profile(&nickname).await?;
    Ok(Envelope::ok(
        format!("Profile of {}.", nickname),
        UserProfileResponse::from(user),
    ))
}

/// GET /user/{nickname}/reviews - Reviews written by a user
#[utoipa::path(
    get,
    path = "/{nickname}/reviews",
    tag = USER_TAG,
    params(("nickname" = String, Path, description = "Nickname of the user"), PageParams),
    responses(
        (status = 200, description = "Paginated reviews", body = Envelope<Page<ReviewDetailResponse>>),
        (status = 400, description = "User does not exist or has withdrawn")
    )
)]
async fn list_reviews(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Envelope<Page<ReviewDetailResponse>>> {
    let (items, total) = state
        .services
        .users
        .reviews_by_nickname(&nickname, params.offset(), params.limit())
        .await?;

    if total == 0 {
        return Ok(Envelope::message("No reviews written yet."));
    }

    let page = Page::new(
        items.into_iter().map(ReviewDetailResponse::from).collect(),
        &params,
        total as u64,
    );
    Ok(Envelope::ok(format!("Reviews written by {}.", nickname), page))
}

/// GET /user/{nickname}/favorites - Favorite games of a user
#[utoipa::path(
    get,
    path = "/{nickname}/favorites",
    tag = USER_TAG,
    params(("nickname" = String, Path, description = "Nickname of the user"), PageParams),
    responses(
        (status = 200, description = "Paginated favorite games", body = Envelope<Page<GameResponse>>),
        (status = 400, description = "User does not exist or has withdrawn")
    )
)]
async fn list_favorites(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Envelope<Page<GameResponse>>> {
    let (items, total) = state
        .services
        .users
        .favorites_by_nickname(&nickname, params.offset(), params.limit())
        .await?;

    if total == 0 {
        return Ok(Envelope::message("No favorite games yet."));
    }

    let page = Page::new(
        items
            .into_iter()
            .map(|(_, game)| GameResponse::from(game))
            .collect(),
        &params,
        total as u64,
    );
    Ok(Envelope::ok(format!("Favorite games of {}.", nickname), page))
}

/// POST /user/favorite - Add a game to favorites
#[utoipa::path(
    post,
    path = "/favorite",
    tag = USER_TAG,
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite added"),
        (status = 400, description = "Game missing or already favorited")
    ),
    security(("bearerAuth" = []))
)]
async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<FavoriteRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .users
        .add_favorite(&auth.login_id, payload.game_id)
        .await?;
    Ok(Envelope::message("Added to favorites."))
}

/// DELETE /user/favorite/{game_id} - Remove a game from favorites
#[utoipa::path(
    delete,
    path = "/favorite/{game_id}",
    tag = USER_TAG,
    params(("game_id" = i32, Path, description = "Game to remove")),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 400, description = "Favorite does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<i32>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .users
        .remove_favorite(&auth.login_id, game_id)
        .await?;
    Ok(Envelope::message("Removed from favorites."))
}
