//! Tests for the register endpoint.

use agentfolio::{
    model::registration::{
        AgentDataDto, RegistrationDto, RepresentationModeDto, RoleDto,
    },
    server::controller::auth::register,
};
use agentfolio_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::player::RepresentationStatus;
use sea_orm::EntityTrait;

fn registration_dto(email: &str, role: RoleDto) -> RegistrationDto {
    RegistrationDto {
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
        role,
        first_name: Some("Lia".to_string()),
        last_name: Some("Moreno".to_string()),
        agency_name: None,
        representation_mode: None,
        agent_data: None,
    }
}

/// Expect 201 and a free-agent player row for a plain player registration
#[tokio::test]
async fn registers_free_agent_player() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let result = register(
        State(test.into_app_state()),
        axum::Json(registration_dto("lia@example.com", RoleDto::Player)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let players = entity::prelude::Player::find().all(&test.db).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(
        players[0].representation_status,
        RepresentationStatus::FreeAgent
    );

    Ok(())
}

/// Expect 201 and an agent row for an agent registration
#[tokio::test]
async fn registers_agent() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let mut dto = registration_dto("marta@example.com", RoleDto::Agent);
    dto.agency_name = Some("Prime Sports".to_string());

    let result = register(State(test.into_app_state()), axum::Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let agents = entity::prelude::Agent::find().all(&test.db).await?;
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].slug, "prime-sports");

    Ok(())
}

/// Expect 201 and a pending invitation when a player names an unregistered agent
#[tokio::test]
async fn registers_player_with_invitation() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let mut dto = registration_dto("lia@example.com", RoleDto::Player);
    dto.representation_mode = Some(RepresentationModeDto::Represented);
    dto.agent_data = Some(AgentDataDto {
        id: None,
        email: Some("agent@example.com".to_string()),
        name: None,
    });

    let result = register(State(test.into_app_state()), axum::Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let invitations = entity::prelude::AgentInvitation::find().all(&test.db).await?;
    assert_eq!(invitations.len(), 1);

    Ok(())
}

/// Expect 409 when registering an already taken email
#[tokio::test]
async fn conflict_for_taken_email() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    test.accounts()
        .insert_user("lia@example.com", entity::user::UserRole::Player)
        .await?;

    let result = register(
        State(test.into_app_state()),
        axum::Json(registration_dto("lia@example.com", RoleDto::Player)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when claiming an agent id that does not exist
#[tokio::test]
async fn not_found_for_unknown_agent_claim() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let mut dto = registration_dto("lia@example.com", RoleDto::Player);
    dto.representation_mode = Some(RepresentationModeDto::Represented);
    dto.agent_data = Some(AgentDataDto {
        id: Some(42),
        email: None,
        name: None,
    });

    let result = register(State(test.into_app_state()), axum::Json(dto)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 when represented mode carries no agent reference
#[tokio::test]
async fn unprocessable_without_agent_data() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let mut dto = registration_dto("lia@example.com", RoleDto::Player);
    dto.representation_mode = Some(RepresentationModeDto::Represented);

    let result = register(State(test.into_app_state()), axum::Json(dto)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
