//! Board handlers: general question posts and their replies.

use axum::extract::{Path, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::BOARD_TAG;
use crate::api::dto::{
    BoardDetailResponse, BoardReplyRequest, BoardReplyResponse, BoardReplyUpdateRequest,
    BoardSummaryResponse, BoardUpdateRequest, BoardUploadRequest, Envelope, ListParams, Page,
    ReplyIdParams,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};

/// Creates the board routes
///
/// # Routes
/// - `POST /upload` - Upload a post
/// - `GET /{id}` - Post detail with replies
/// - `PUT /update` - Update a post (author only)
/// - `DELETE /{id}` - Delete a post (author only)
/// - `GET /list` - List posts, optionally filtered by keyword
/// - `POST /reply` - Add a reply
/// - `PUT /reply` - Update a reply (author only)
/// - `DELETE /reply?id=` - Delete a reply (author only)
pub fn board_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(upload_post))
        .routes(routes!(list_posts))
        .routes(routes!(update_post))
        .routes(routes!(get_post, delete_post))
        .routes(routes!(add_reply, update_reply, delete_reply))
}

/// POST /board/upload - Upload a post
#[utoipa::path(
    post,
    path = "/upload",
    tag = BOARD_TAG,
    request_body = BoardUploadRequest,
    responses(
        (status = 200, description = "Post uploaded", body = Envelope<BoardDetailResponse>)
    ),
    security(("bearerAuth" = []))
)]
async fn upload_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<BoardUploadRequest>,
) -> AppResult<Envelope<BoardDetailResponse>> {
    let board = state
        .services
        .boards
        .upload(&auth.login_id, payload.title, payload.content)
        .await?;
    Ok(Envelope::ok(
        "The post has been uploaded.",
        BoardDetailResponse::from_parts(board, Vec::new()),
    ))
}

/// GET /board/{id} - Post detail with replies
#[utoipa::path(
    get,
    path = "/{id}",
    tag = BOARD_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post detail", body = Envelope<BoardDetailResponse>),
        (status = 400, description = "Post does not exist")
    )
)]
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Envelope<BoardDetailResponse>> {
    let (board, replies) = state.services.boards.get_detail(id).await?;
    Ok(Envelope::ok(
        "Board post detail.",
        BoardDetailResponse::from_parts(board, replies),
    ))
}

/// PUT /board/update - Update a post
#[utoipa::path(
    put,
    path = "/update",
    tag = BOARD_TAG,
    request_body = BoardUpdateRequest,
    responses(
        (status = 200, description = "Post updated"),
        (status = 400, description = "Post missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<BoardUpdateRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .boards
        .update(&auth.login_id, payload.id, payload.title, payload.content)
        .await?;
    Ok(Envelope::message("The post has been updated."))
}

/// DELETE /board/{id} - Delete a post
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = BOARD_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 400, description = "Post missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Envelope<()>> {
    state.services.boards.delete(&auth.login_id, id).await?;
    Ok(Envelope::message("The post has been deleted."))
}

/// GET /board/list - List posts, optionally filtered by keyword
#[utoipa::path(
    get,
    path = "/list",
    tag = BOARD_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Paginated posts", body = Envelope<Page<BoardSummaryResponse>>)
    )
)]
async fn list_posts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> AppResult<Envelope<Page<BoardSummaryResponse>>> {
    let page_params = params.page_params();
    let (items, total) = match params.keyword() {
        Some(keyword) => {
            state
                .services
                .boards
                .search(keyword, page_params.offset(), page_params.limit())
                .await?
        }
        None => {
            state
                .services
                .boards
                .list(page_params.offset(), page_params.limit())
                .await?
        }
    };

    if total == 0 {
        let message = if params.keyword().is_some() {
            "No posts matched the keyword."
        } else {
            "There are no posts yet."
        };
        return Ok(Envelope::message(message));
    }

    let page = Page::new(
        items.into_iter().map(BoardSummaryResponse::from).collect(),
        &page_params,
        total as u64,
    );
    Ok(Envelope::ok("Board post list.", page))
}

/// POST /board/reply - Add a reply
#[utoipa::path(
    post,
    path = "/reply",
    tag = BOARD_TAG,
    request_body = BoardReplyRequest,
    responses(
        (status = 200, description = "Reply added", body = Envelope<BoardReplyResponse>),
        (status = 400, description = "Post does not exist")
    ),
    security(("bearerAuth" = []))
)]
async fn add_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<BoardReplyRequest>,
) -> AppResult<Envelope<BoardReplyResponse>> {
    let reply = state
        .services
        .board_replies
        .add(&auth.login_id, payload.board_id, payload.content)
        .await?;
    Ok(Envelope::ok(
        "The reply has been added.",
        BoardReplyResponse::from(reply),
    ))
}

/// PUT /board/reply - Update a reply
#[utoipa::path(
    put,
    path = "/reply",
    tag = BOARD_TAG,
    request_body = BoardReplyUpdateRequest,
    responses(
        (status = 200, description = "Reply updated"),
        (status = 400, description = "Reply missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn update_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<BoardReplyUpdateRequest>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .board_replies
        .update(&auth.login_id, payload.id, &payload.content)
        .await?;
    Ok(Envelope::message("The reply has been updated."))
}

/// DELETE /board/reply?id= - Delete a reply
#[utoipa::path(
    delete,
    path = "/reply",
    tag = BOARD_TAG,
    params(ReplyIdParams),
    responses(
        (status = 200, description = "Reply deleted"),
        (status = 400, description = "Reply missing or not the author")
    ),
    security(("bearerAuth" = []))
)]
async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(params): ValidatedQuery<ReplyIdParams>,
) -> AppResult<Envelope<()>> {
    state
        .services
        .board_replies
        .delete(&auth.login_id, params.id)
        .await?;
    Ok(Envelope::message("The reply has been deleted."))
}
