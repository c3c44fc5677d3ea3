//! Tests for the create_agent endpoint.

use agentfolio::{model::registration::CreateAgentDto, server::controller::agent::create_agent};
use agentfolio_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::player::RepresentationStatus;
use sea_orm::EntityTrait;

/// Expect 201 when creating an agent profile for an existing user
#[tokio::test]
async fn creates_agent_profile() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test
        .accounts()
        .insert_user("marta@example.com", entity::user::UserRole::Agent)
        .await?;

    let result = create_agent(
        State(test.into_app_state()),
        axum::Json(CreateAgentDto {
            user_id: user.id,
            agency_name: "Prime Sports".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect pending invitations to be resolved when the profile is created
#[tokio::test]
async fn resolves_pending_invitations() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test
        .accounts()
        .insert_user("marta@example.com", entity::user::UserRole::Agent)
        .await?;
    let player = test
        .accounts()
        .insert_player(None, None, RepresentationStatus::PendingInvitation)
        .await?;
    test.accounts()
        .insert_pending_invitation(player.id, "marta@example.com", "tok-1")
        .await?;

    let result = create_agent(
        State(test.into_app_state()),
        axum::Json(CreateAgentDto {
            user_id: user.id,
            agency_name: "Prime Sports".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());

    let player = entity::prelude::Player::find_by_id(player.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(
        player.representation_status,
        RepresentationStatus::PendingConfirmation
    );

    Ok(())
}

/// Expect 404 when the user does not exist
#[tokio::test]
async fn not_found_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let result = create_agent(
        State(test.into_app_state()),
        axum::Json(CreateAgentDto {
            user_id: 42,
            agency_name: "Prime Sports".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when the user already owns an agent profile
#[tokio::test]
async fn conflict_for_existing_profile() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (user, _) = test
        .accounts()
        .insert_agent("marta@example.com", "Prime Sports", "prime-sports")
        .await?;

    let result = create_agent(
        State(test.into_app_state()),
        axum::Json(CreateAgentDto {
            user_id: user.id,
            agency_name: "Second Agency".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
