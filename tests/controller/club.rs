//! Tests for the club catalog endpoints.

use agentfolio::{
    model::club::{ClubSearchParams, ProposeClubDto},
    server::controller::club::{propose_club, search_clubs},
};
use agentfolio_test_utils::prelude::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

fn proposal(name: &str) -> ProposeClubDto {
    ProposeClubDto {
        name: name.to_string(),
        short_name: None,
        country: None,
        city: None,
        logo_url: None,
    }
}

/// Expect 201 and an unverified row for a new club name
#[tokio::test]
async fn proposes_new_club() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.catalog()
        .insert_club("Club Atletico River Plate", true)
        .await?;

    let result = propose_club(
        State(test.into_app_state()),
        axum::Json(proposal("Boca Juniors")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let clubs = entity::prelude::ClubCatalog::find().all(&test.db).await?;
    assert_eq!(clubs.len(), 2);

    Ok(())
}

/// Expect 409 for a case-insensitive exact duplicate
#[tokio::test]
async fn conflict_for_exact_duplicate() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.catalog()
        .insert_club("Club Atletico River Plate", true)
        .await?;

    let result = propose_club(
        State(test.into_app_state()),
        axum::Json(proposal("club atletico river plate")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 for a near-identical misspelling
#[tokio::test]
async fn conflict_for_near_duplicate() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.catalog()
        .insert_club("Club Atletico River Plate", true)
        .await?;

    let result = propose_club(
        State(test.into_app_state()),
        axum::Json(proposal("Club Atletico Riber Plate")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with matches for an autocomplete query
#[tokio::test]
async fn searches_catalog() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.catalog().insert_club("Atletico Madrid", true).await?;

    let result = search_clubs(
        State(test.into_app_state()),
        Query(ClubSearchParams {
            query: "atletico".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
