use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub representation_status: String,
    pub agent_id: Option<i32>,
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            representation_status: player.representation_status.to_value(),
            agent_id: player.agent_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRosterPlayerDto {
    pub first_name: String,
    pub last_name: String,
}
