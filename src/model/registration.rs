use serde::{Deserialize, Serialize};

/// Registration payload for both player and agent accounts.
///
/// `representation_mode` and `agent_data` are only meaningful for player
/// registrations; `agency_name` only for agent registrations.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub email: String,
    pub password: String,
    pub role: RoleDto,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub agency_name: Option<String>,
    pub representation_mode: Option<RepresentationModeDto>,
    pub agent_data: Option<AgentDataDto>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Player,
    Agent,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RepresentationModeDto {
    Free,
    Represented,
}

/// Identifies the claimed agent: either by id (already registered) or by
/// email and optional name (not yet registered, triggers an invitation).
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AgentDataDto {
    pub id: Option<i32>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Creates an agent profile for an already registered user.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentDto {
    pub user_id: i32,
    pub agency_name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentDto {
    pub id: i32,
    pub agency_name: String,
    pub slug: String,
}

impl From<entity::agent::Model> for AgentDto {
    fn from(agent: entity::agent::Model) -> Self {
        Self {
            id: agent.id,
            agency_name: agent.agency_name,
            slug: agent.slug,
        }
    }
}

/// Registration returns the created profile matching the requested role.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum RegisterResponseDto {
    Player(crate::model::roster::PlayerDto),
    Agent(AgentDto),
}
