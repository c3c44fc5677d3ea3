use entity::player::{self, RepresentationStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::roster::AddRosterPlayerDto,
    server::{
        data::{agent::AgentRepository, player::PlayerRepository},
        error::{representation::RepresentationError, Error},
        service::representation::{transition, RepresentationEvent},
    },
};

/// Roster management for agents: manually tracked players plus the agent-side
/// half of the representation lifecycle (confirming and releasing).
pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a player record directly to an agent's roster.
    ///
    /// These are agent-entered records without a user account, so they skip
    /// the claim/confirm lifecycle and start out represented.
    pub async fn add_player(
        &self,
        agent_id: i32,
        dto: AddRosterPlayerDto,
    ) -> Result<player::Model, Error> {
        let agent = AgentRepository::new(self.db)
            .get_by_id(agent_id)
            .await?
            .ok_or(RepresentationError::AgentNotFound(agent_id))?;

        let player = PlayerRepository::new(self.db)
            .create(
                None,
                Some(agent.id),
                dto.first_name,
                dto.last_name,
                RepresentationStatus::Represented,
            )
            .await?;

        Ok(player)
    }

    /// Lists all players on an agent's roster.
    pub async fn list_players(&self, agent_id: i32) -> Result<Vec<player::Model>, Error> {
        AgentRepository::new(self.db)
            .get_by_id(agent_id)
            .await?
            .ok_or(RepresentationError::AgentNotFound(agent_id))?;

        let players = PlayerRepository::new(self.db)
            .get_by_agent_id(agent_id)
            .await?;

        Ok(players)
    }

    /// Removes a player record from an agent's roster.
    pub async fn remove_player(&self, agent_id: i32, player_id: i32) -> Result<(), Error> {
        let player = self.owned_player(agent_id, player_id).await?;

        PlayerRepository::new(self.db).delete(player.id).await?;

        Ok(())
    }

    /// Confirms a pending representation claim, moving the player to
    /// `Represented`.
    pub async fn confirm_representation(
        &self,
        agent_id: i32,
        player_id: i32,
    ) -> Result<player::Model, Error> {
        let player = self.owned_player(agent_id, player_id).await?;

        let status = transition(
            player.representation_status,
            RepresentationEvent::ConfirmRepresentation,
        )?;

        let player = PlayerRepository::new(self.db)
            .update_representation(player.id, status, Some(agent_id))
            .await?
            .ok_or(RepresentationError::PlayerNotFound(player_id))?;

        Ok(player)
    }

    /// Releases a player back to free agency, clearing the agent link.
    pub async fn release_player(
        &self,
        agent_id: i32,
        player_id: i32,
    ) -> Result<player::Model, Error> {
        let player = self.owned_player(agent_id, player_id).await?;

        let status = transition(player.representation_status, RepresentationEvent::Release)?;

        let player = PlayerRepository::new(self.db)
            .update_representation(player.id, status, None)
            .await?
            .ok_or(RepresentationError::PlayerNotFound(player_id))?;

        Ok(player)
    }

    /// Fetches a player and verifies it belongs to the acting agent.
    async fn owned_player(
        &self,
        agent_id: i32,
        player_id: i32,
    ) -> Result<player::Model, Error> {
        let player = PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .ok_or(RepresentationError::PlayerNotFound(player_id))?;

        if player.agent_id != Some(agent_id) {
            return Err(RepresentationError::PlayerNotOwned {
                player_id,
                agent_id,
            }
            .into());
        }

        Ok(player)
    }
}
