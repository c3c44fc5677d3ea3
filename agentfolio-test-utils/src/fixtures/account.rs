use chrono::Utc;
use entity::{
    agent,
    agent_invitation::{self, InvitationStatus},
    player::{self, RepresentationStatus},
    user::{self, UserRole},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Inserts user, agent, player, and invitation fixture rows directly through
/// entity active models, bypassing the main crate's repositories.
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_user(&self, email: &str, role: UserRole) -> Result<user::Model, TestError> {
        let user = user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set("fixture-password-hash".to_string()),
            role: ActiveValue::Set(role),
            first_name: ActiveValue::Set(None),
            last_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Inserts an agent together with its owning user account
    pub async fn insert_agent(
        &self,
        email: &str,
        agency_name: &str,
        slug: &str,
    ) -> Result<(user::Model, agent::Model), TestError> {
        let user = self.insert_user(email, UserRole::Agent).await?;

        let agent = agent::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            agency_name: ActiveValue::Set(agency_name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let agent = agent.insert(self.db).await?;

        Ok((user, agent))
    }

    pub async fn insert_player(
        &self,
        user_id: Option<i32>,
        agent_id: Option<i32>,
        status: RepresentationStatus,
    ) -> Result<player::Model, TestError> {
        let player = player::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            agent_id: ActiveValue::Set(agent_id),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Player".to_string()),
            representation_status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(player.insert(self.db).await?)
    }

    pub async fn insert_pending_invitation(
        &self,
        player_id: i32,
        target_email: &str,
        token: &str,
    ) -> Result<agent_invitation::Model, TestError> {
        let invitation = agent_invitation::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            target_email: ActiveValue::Set(target_email.to_string()),
            target_name: ActiveValue::Set(None),
            token: ActiveValue::Set(token.to_string()),
            status: ActiveValue::Set(InvitationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(invitation.insert(self.db).await?)
    }
}
