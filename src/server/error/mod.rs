//! Error types for the Agentfolio server application.
//!
//! Each domain has its own `thiserror` enum implementing `IntoResponse`; the
//! top-level [`Error`] aggregates them together with external library errors
//! so service and controller code can propagate with `?`.

pub mod catalog;
pub mod registration;
pub mod representation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::TransactionError;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, registration::RegistrationError,
        representation::RepresentationError,
    },
};

#[derive(Error, Debug)]
pub enum Error {
    /// Registration error (duplicate email, unresolved agent reference).
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Club catalog error (exact or near-duplicate club name).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Representation lifecycle error (invalid transition, missing player).
    #[error(transparent)]
    RepresentationError(#[from] RepresentationError),
    /// Password hashing failure during registration.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Unwraps sea-orm's transaction wrapper so closures running inside
/// `db.transaction(..)` can keep returning the application error type.
impl From<TransactionError<Error>> for Error {
    fn from(err: TransactionError<Error>) -> Self {
        match err {
            TransactionError::Connection(e) => Self::DbErr(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RegistrationError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::RepresentationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
