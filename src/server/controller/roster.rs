use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        roster::{AddRosterPlayerDto, PlayerDto},
    },
    server::{error::Error, model::app::AppState, service::roster::RosterService},
};

pub static ROSTER_TAG: &str = "roster";

/// Add a player record to an agent's roster
#[utoipa::path(
    post,
    path = "/api/agents/{agent_id}/players",
    tag = ROSTER_TAG,
    params(("agent_id" = i32, Path, description = "Agent ID")),
    request_body = AddRosterPlayerDto,
    responses(
        (status = 201, description = "Player added to roster", body = PlayerDto),
        (status = 404, description = "Agent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_roster_player(
    State(state): State<AppState>,
    Path(agent_id): Path<i32>,
    axum::Json(dto): axum::Json<AddRosterPlayerDto>,
) -> Result<impl IntoResponse, Error> {
    let roster_service = RosterService::new(&state.db);

    let player = roster_service.add_player(agent_id, dto).await?;

    Ok((StatusCode::CREATED, axum::Json(PlayerDto::from(player))).into_response())
}

/// List all players on an agent's roster
#[utoipa::path(
    get,
    path = "/api/agents/{agent_id}/players",
    tag = ROSTER_TAG,
    params(("agent_id" = i32, Path, description = "Agent ID")),
    responses(
        (status = 200, description = "Roster players", body = Vec<PlayerDto>),
        (status = 404, description = "Agent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster_players(
    State(state): State<AppState>,
    Path(agent_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let roster_service = RosterService::new(&state.db);

    let players = roster_service.list_players(agent_id).await?;
    let player_dtos: Vec<PlayerDto> = players.into_iter().map(PlayerDto::from).collect();

    Ok((StatusCode::OK, axum::Json(player_dtos)).into_response())
}

/// Remove a player record from an agent's roster
#[utoipa::path(
    delete,
    path = "/api/agents/{agent_id}/players/{player_id}",
    tag = ROSTER_TAG,
    params(
        ("agent_id" = i32, Path, description = "Agent ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Player removed from roster"),
        (status = 404, description = "Player not found or not on this roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_roster_player(
    State(state): State<AppState>,
    Path((agent_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let roster_service = RosterService::new(&state.db);

    roster_service.remove_player(agent_id, player_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Confirm a player's pending representation claim
#[utoipa::path(
    post,
    path = "/api/agents/{agent_id}/players/{player_id}/confirm",
    tag = ROSTER_TAG,
    params(
        ("agent_id" = i32, Path, description = "Agent ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Representation confirmed", body = PlayerDto),
        (status = 404, description = "Player not found or not on this roster", body = ErrorDto),
        (status = 409, description = "Player is not awaiting confirmation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_representation(
    State(state): State<AppState>,
    Path((agent_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let roster_service = RosterService::new(&state.db);

    let player = roster_service
        .confirm_representation(agent_id, player_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(PlayerDto::from(player))).into_response())
}

/// Release a player back to free agency
#[utoipa::path(
    post,
    path = "/api/agents/{agent_id}/players/{player_id}/release",
    tag = ROSTER_TAG,
    params(
        ("agent_id" = i32, Path, description = "Agent ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player released", body = PlayerDto),
        (status = 404, description = "Player not found or not on this roster", body = ErrorDto),
        (status = 409, description = "Player is already a free agent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_player(
    State(state): State<AppState>,
    Path((agent_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let roster_service = RosterService::new(&state.db);

    let player = roster_service.release_player(agent_id, player_id).await?;

    Ok((StatusCode::OK, axum::Json(PlayerDto::from(player))).into_response())
}
