use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Club catalog conflicts carry the matched name(s) so a human operator can
/// decide whether to proceed with a different name.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("A club named {0:?} already exists in the catalog")]
    ExactDuplicate(String),
    #[error("Proposed club name is too similar to existing entries: {0}")]
    NearDuplicates(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
