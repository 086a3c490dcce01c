//! Router configuration for the API.
//!
//! Routes are registered per resource and merged with the OpenAPI
//! document; Swagger UI is served at `/swagger-ui`.

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so request IDs exist before the logging middleware runs.
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/user", handlers::users::user_routes())
        .nest("/board", handlers::boards::board_routes())
        .nest("/game", handlers::games::game_routes())
        .nest("/review", handlers::reviews::review_routes())
        .nest("/question", handlers::game_questions::question_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
