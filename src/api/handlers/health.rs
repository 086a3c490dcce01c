//! Health check endpoint.

use axum::extract::State;
use diesel_async::RunQueryDsl;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;

/// Health check response structure.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "healthy" when the database answers, "unhealthy" otherwise
    pub status: &'static str,
    /// Application version
    pub version: &'static str,
    /// Whether a pooled connection could run a round-trip query
    pub database: bool,
}

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// GET /health - Liveness plus a database round trip
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> axum::Json<HealthResponse> {
    let database = check_database(&state).await;

    axum::Json(HealthResponse {
        status: if database { "healthy" } else { "unhealthy" },
        version: crate::pkg_version(),
        database,
    })
}

async fn check_database(state: &AppState) -> bool {
    let Ok(mut conn) = state.db_pool.get().await else {
        return false;
    };
    diesel::sql_query("SELECT 1").execute(&mut conn).await.is_ok()
}
