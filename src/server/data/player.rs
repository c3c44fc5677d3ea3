use chrono::Utc;
use entity::player::{self, RepresentationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Option<i32>,
        agent_id: Option<i32>,
        first_name: String,
        last_name: String,
        representation_status: RepresentationStatus,
    ) -> Result<player::Model, DbErr> {
        let player = player::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            agent_id: ActiveValue::Set(agent_id),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            representation_status: ActiveValue::Set(representation_status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_agent_id(&self, agent_id: i32) -> Result<Vec<player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(player::Column::AgentId.eq(agent_id))
            .all(self.db)
            .await
    }

    /// Updates a player's representation status and agent reference together.
    ///
    /// The two columns always move as a pair so the status/agent consistency
    /// convention holds; passing `agent_id = None` clears the link.
    pub async fn update_representation(
        &self,
        player_id: i32,
        representation_status: RepresentationStatus,
        agent_id: Option<i32>,
    ) -> Result<Option<player::Model>, DbErr> {
        let player = match entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        {
            Some(player) => player,
            None => return Ok(None),
        };

        let mut player_am = player.into_active_model();
        player_am.representation_status = ActiveValue::Set(representation_status);
        player_am.agent_id = ActiveValue::Set(agent_id);

        let player = player_am.update(self.db).await?;

        Ok(Some(player))
    }

    /// Deletes a player
    ///
    /// Returns OK regardless of the player existing; check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await
    }
}
