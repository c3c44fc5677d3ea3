use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        registration::{AgentDto, CreateAgentDto},
    },
    server::{error::Error, model::app::AppState, service::agent::AgentService},
};

pub static AGENT_TAG: &str = "agent";

/// Create an agent profile for an existing user
#[utoipa::path(
    post,
    path = "/api/agents",
    tag = AGENT_TAG,
    request_body = CreateAgentDto,
    responses(
        (status = 201, description = "Agent profile created", body = AgentDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already owns an agent profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_agent(
    State(state): State<AppState>,
    axum::Json(dto): axum::Json<CreateAgentDto>,
) -> Result<impl IntoResponse, Error> {
    let agent_service = AgentService::new(&state.db);

    let agent = agent_service
        .create_agent_for_user(dto.user_id, dto.agency_name)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(AgentDto::from(agent))).into_response())
}
