use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        registration::{RegisterResponseDto, RegistrationDto, RoleDto},
    },
    server::{error::Error, model::app::AppState, service::registration::RegistrationService},
};

pub static AUTH_TAG: &str = "auth";

/// Register a new player or agent account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegistrationDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 404, description = "Claimed agent not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Represented registration without agent reference", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    axum::Json(dto): axum::Json<RegistrationDto>,
) -> Result<impl IntoResponse, Error> {
    let registration_service = RegistrationService::new(&state.db, &state.public_url);

    let response = match dto.role {
        RoleDto::Player => {
            let player = registration_service.register_player(dto).await?;

            RegisterResponseDto::Player(player.into())
        }
        RoleDto::Agent => {
            let agent = registration_service.register_agent(dto).await?;

            RegisterResponseDto::Agent(agent.into())
        }
    };

    Ok((StatusCode::CREATED, axum::Json(response)).into_response())
}
