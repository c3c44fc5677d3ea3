use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("An account already exists for email {0:?}")]
    EmailTaken(String),
    #[error("Agent ID {0} does not exist")]
    AgentNotFound(i32),
    #[error("User ID {0} does not exist")]
    UserNotFound(i32),
    #[error("User ID {0} already owns an agent profile")]
    AgentProfileExists(i32),
    #[error("Represented registration requires either an agent id or an agent email")]
    MissingAgentData,
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmailTaken(_) | Self::AgentProfileExists(_) => StatusCode::CONFLICT,
            Self::AgentNotFound(_) | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingAgentData => StatusCode::UNPROCESSABLE_ENTITY,
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
