use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::player::RepresentationStatus;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::service::representation::RepresentationEvent};

#[derive(Error, Debug)]
pub enum RepresentationError {
    #[error("Cannot apply {event:?} to a player in state {from:?}")]
    InvalidTransition {
        from: RepresentationStatus,
        event: RepresentationEvent,
    },
    #[error("Player ID {0} not found")]
    PlayerNotFound(i32),
    #[error("Player ID {player_id} is not on the roster of agent ID {agent_id}")]
    PlayerNotOwned { player_id: i32, agent_id: i32 },
    #[error("Agent ID {0} not found")]
    AgentNotFound(i32),
}

impl IntoResponse for RepresentationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::PlayerNotFound(_) | Self::PlayerNotOwned { .. } | Self::AgentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
