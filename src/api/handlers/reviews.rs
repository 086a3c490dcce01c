//! Review handlers.

use axum::extract::{Path, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::REVIEW_TAG;
use crate::api::dto::{
    Envelope, Page, PageParams, ReviewDetailResponse, ReviewUpdateRequest, ReviewUploadRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};

/// Creates the review routes
///
/// # Routes
/// - `POST /upload` - Write a review
/// - `PUT /update` - Edit a review (author only)
/// - `DELETE /{id}` - Delete a review (author only)
/// - `GET /game/{game_id}` - Paginated reviews of a game
pub fn review_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(upload_review))
        .routes(routes!(update_review))
        .routes(routes!(delete_review))
        .routes(routes!(list_reviews_by_game))
}

/// POST /review/upload - Write a review
#[utoipa::path(
    post,
    path = "/upload",
    tag = REVIEW_TAG,
    request_body = ReviewUploadRequest,
    responses(
        (status = 200, description = "Review posted", body = Envelope<ReviewDetailResponse>),
        (status = 400, description = "Game does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn upload_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<ReviewUploadRequest>,
) -> AppResult<Envelope<ReviewDetailResponse>> {
    let created = state
        .services
        .reviews
        .upload(&auth.login_id, payload.game_id, payload.comment, payload.rating)
        .await?;
    Ok(Envelope::ok(
        "The review has been posted.",
        ReviewDetailResponse::from(created),
    ))
}

/// PUT /review/update - Edit a review
#[utoipa::path(
    put,
    path = "/update",
    tag = REVIEW_TAG,
    request_body = ReviewUpdateRequest,
    responses(
        (status = 200, description = "Review updated"),
        (status = 400, description = "Review missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<ReviewUpdateRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .reviews
        .update(&auth.login_id, payload.id, payload.comment, payload.rating)
        .await?;
    Ok(Envelope::message("The review has been updated."))
}

/// DELETE /review/{id} - Delete a review
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 400, description = "Review missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Envelope<()>> {
    state.services.reviews.delete(&auth.login_id, id).await?;
    Ok(Envelope::message("The review has been deleted."))
}

/// GET /review/game/{game_id} - Paginated reviews of a game
#[utoipa::path(
    get,
    path = "/game/{game_id}",
    tag = REVIEW_TAG,
    params(("game_id" = i32, Path, description = "Game id"), PageParams),
    responses(
        (status = 200, description = "Paginated reviews", body = Envelope<Page<ReviewDetailResponse>>),
        (status = 400, description = "Game does not exist")
    )
)]
async fn list_reviews_by_game(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> AppResult<Envelope<Page<ReviewDetailResponse>>> {
    let (items, total) = state
        .services
        .reviews
        .list_by_game(game_id, params.offset(), params.limit())
        .await?;

    if total == 0 {
        return Ok(Envelope::message("No reviews for this game yet."));
    }

    let page = Page::new(
        items.into_iter().map(ReviewDetailResponse::from).collect(),
        &params,
        total as u64,
    );
    Ok(Envelope::ok("Reviews for the game.", page))
}
