//! Tests for the roster and representation lifecycle endpoints.

use agentfolio::{
    model::roster::AddRosterPlayerDto,
    server::controller::roster::{
        add_roster_player, confirm_representation, get_roster_players, release_player,
        remove_roster_player,
    },
};
use agentfolio_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::player::RepresentationStatus;
use sea_orm::EntityTrait;

/// Expect 201 when adding a player record to an agent's roster
#[tokio::test]
async fn adds_roster_player() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;

    let result = add_roster_player(
        State(test.into_app_state()),
        Path(agent.id),
        axum::Json(AddRosterPlayerDto {
            first_name: "Lia".to_string(),
            last_name: "Moreno".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 when adding to a roster of an agent that does not exist
#[tokio::test]
async fn not_found_for_unknown_agent() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let result = add_roster_player(
        State(test.into_app_state()),
        Path(42),
        axum::Json(AddRosterPlayerDto {
            first_name: "Lia".to_string(),
            last_name: "Moreno".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the agent's players when listing a roster
#[tokio::test]
async fn lists_roster_players() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;
    test.accounts()
        .insert_player(None, Some(agent.id), RepresentationStatus::Represented)
        .await?;

    let result = get_roster_players(State(test.into_app_state()), Path(agent.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 204 and a deleted row when removing a roster player
#[tokio::test]
async fn removes_roster_player() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;
    let player = test
        .accounts()
        .insert_player(None, Some(agent.id), RepresentationStatus::Represented)
        .await?;

    let result = remove_roster_player(
        State(test.into_app_state()),
        Path((agent.id, player.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::Player::find_by_id(player.id)
        .one(&test.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Expect 404 when acting on a player owned by a different agent
#[tokio::test]
async fn not_found_for_foreign_player() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("one@example.com", "Prime Sports", "prime-sports")
        .await?;
    let (_, other) = test
        .accounts()
        .insert_agent("two@example.com", "Top Talent", "top-talent")
        .await?;
    let player = test
        .accounts()
        .insert_player(None, Some(other.id), RepresentationStatus::Represented)
        .await?;

    let result = remove_roster_player(
        State(test.into_app_state()),
        Path((agent.id, player.id)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 and a represented player after confirmation
#[tokio::test]
async fn confirms_representation() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;
    let player = test
        .accounts()
        .insert_player(
            None,
            Some(agent.id),
            RepresentationStatus::PendingConfirmation,
        )
        .await?;

    let result = confirm_representation(
        State(test.into_app_state()),
        Path((agent.id, player.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let player = entity::prelude::Player::find_by_id(player.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(
        player.representation_status,
        RepresentationStatus::Represented
    );

    Ok(())
}

/// Expect 409 when confirming a player who is not awaiting confirmation
#[tokio::test]
async fn conflict_for_invalid_confirmation() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;
    let player = test
        .accounts()
        .insert_player(None, Some(agent.id), RepresentationStatus::Represented)
        .await?;

    let result = confirm_representation(
        State(test.into_app_state()),
        Path((agent.id, player.id)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 and a cleared agent link after release
#[tokio::test]
async fn releases_player() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let (_, agent) = test
        .accounts()
        .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
        .await?;
    let player = test
        .accounts()
        .insert_player(None, Some(agent.id), RepresentationStatus::Represented)
        .await?;

    let result = release_player(
        State(test.into_app_state()),
        Path((agent.id, player.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let player = entity::prelude::Player::find_by_id(player.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(
        player.representation_status,
        RepresentationStatus::FreeAgent
    );
    assert!(player.agent_id.is_none());

    Ok(())
}
