//! Game catalogue handlers.

use axum::extract::{Path, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::GAME_TAG;
use crate::api::dto::{Envelope, GameResponse, ListParams, Page};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedQuery;

/// Creates the game routes
///
/// # Routes
/// - `GET /{id}` - Game detail
/// - `GET /list` - List games, optionally filtered by keyword
pub fn game_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_games))
        .routes(routes!(get_game))
}

/// GET /game/{id} - Game detail
#[utoipa::path(
    get,
    path = "/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Game detail", body = Envelope<GameResponse>),
        (status = 400, description = "Game does not exist")
    )
)]
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Envelope<GameResponse>> {
    let game = state.services.games.get_game(id).await?;
    Ok(Envelope::ok("Game detail.", GameResponse::from(game)))
}

/// GET /game/list - List games, optionally filtered by keyword
#[utoipa::path(
    get,
    path = "/list",
    tag = GAME_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Paginated games", body = Envelope<Page<GameResponse>>)
    )
)]
async fn list_games(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> AppResult<Envelope<Page<GameResponse>>> {
    let page_params = params.page_params();
    let (items, total) = match params.keyword() {
        Some(keyword) => {
            state
                .services
                .games
                .search(keyword, page_params.offset(), page_params.limit())
                .await?
        }
        None => {
            state
                .services
                .games
                .list(page_params.offset(), page_params.limit())
                .await?
        }
    };

    if total == 0 {
        let message = if params.keyword().is_some() {
            "No games matched the keyword."
        } else {
            "No games registered yet."
        };
        return Ok(Envelope::message(message));
    }

    let page = Page::new(
        items.into_iter().map(GameResponse::from).collect(),
        &page_params,
        total as u64,
    );
    Ok(Envelope::ok("Game list.", page))
}
