use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDto, ClubSearchParams, ProposeClubDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static CLUB_TAG: &str = "club";

/// Search the club catalog for autocomplete
#[utoipa::path(
    get,
    path = "/api/clubs/search",
    tag = CLUB_TAG,
    params(ClubSearchParams),
    responses(
        (status = 200, description = "Matching clubs, verified entries first", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_clubs(
    State(state): State<AppState>,
    Query(params): Query<ClubSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let clubs = catalog_service.search(&params.query).await?;
    let club_dtos: Vec<ClubDto> = clubs.into_iter().map(ClubDto::from).collect();

    Ok((StatusCode::OK, axum::Json(club_dtos)).into_response())
}

/// Propose a new club for the catalog
#[utoipa::path(
    post,
    path = "/api/clubs",
    tag = CLUB_TAG,
    request_body = ProposeClubDto,
    responses(
        (status = 201, description = "Club accepted as unverified entry", body = ClubDto),
        (status = 409, description = "Name duplicates an existing entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn propose_club(
    State(state): State<AppState>,
    axum::Json(dto): axum::Json<ProposeClubDto>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let club = catalog_service.propose(dto).await?;

    Ok((StatusCode::CREATED, axum::Json(ClubDto::from(club))).into_response())
}
