use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const USER_TAG: &str = "User";
pub const BOARD_TAG: &str = "Board";
pub const GAME_TAG: &str = "Game";
pub const REVIEW_TAG: &str = "Review";
pub const QUESTION_TAG: &str = "GameQuestion";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boardgamers",
        description = "API server for the board-game community platform",
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Login and token refresh"),
        (name = USER_TAG, description = "Accounts, profiles and favorites"),
        (name = BOARD_TAG, description = "General question board"),
        (name = GAME_TAG, description = "Game catalogue"),
        (name = REVIEW_TAG, description = "Game reviews"),
        (name = QUESTION_TAG, description = "Per-game questions and answers"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
