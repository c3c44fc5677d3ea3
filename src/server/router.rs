//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Register a player or agent account
/// - `POST /api/agents` - Create an agent profile for an existing user
/// - `POST /api/agents/{agent_id}/players` - Add a player to an agent's roster
/// - `GET /api/agents/{agent_id}/players` - List an agent's roster
/// - `DELETE /api/agents/{agent_id}/players/{player_id}` - Remove a roster player
/// - `POST /api/agents/{agent_id}/players/{player_id}/confirm` - Confirm representation
/// - `POST /api/agents/{agent_id}/players/{player_id}/release` - Release a player
/// - `GET /api/clubs/search` - Search the club catalog
/// - `POST /api/clubs` - Propose a new club
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Agentfolio", description = "Agentfolio API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account registration API routes"),
        (name = controller::agent::AGENT_TAG, description = "Agent profile API routes"),
        (name = controller::roster::ROSTER_TAG, description = "Roster and representation API routes"),
        (name = controller::club::CLUB_TAG, description = "Club catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::agent::create_agent))
        .routes(routes!(
            controller::roster::add_roster_player,
            controller::roster::get_roster_players
        ))
        .routes(routes!(controller::roster::remove_roster_player))
        .routes(routes!(controller::roster::confirm_representation))
        .routes(routes!(controller::roster::release_player))
        .routes(routes!(controller::club::search_clubs))
        .routes(routes!(controller::club::propose_club))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
