use chrono::Utc;
use entity::agent_invitation::{self, InvitationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct InvitationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    /// Creates a new instance of [`InvitationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending invitation for a saved player.
    ///
    /// The player row must already exist; the invitation carries its id as a
    /// foreign key.
    pub async fn create(
        &self,
        player_id: i32,
        target_email: &str,
        target_name: Option<String>,
        token: String,
    ) -> Result<agent_invitation::Model, DbErr> {
        let invitation = agent_invitation::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            target_email: ActiveValue::Set(target_email.to_lowercase()),
            target_name: ActiveValue::Set(target_name),
            token: ActiveValue::Set(token),
            status: ActiveValue::Set(InvitationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        invitation.insert(self.db).await
    }

    /// Returns all pending invitations addressed to an email, oldest first.
    pub async fn get_pending_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<agent_invitation::Model>, DbErr> {
        entity::prelude::AgentInvitation::find()
            .filter(agent_invitation::Column::TargetEmail.eq(email.to_lowercase()))
            .filter(agent_invitation::Column::Status.eq(InvitationStatus::Pending))
            .order_by_asc(agent_invitation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn mark_accepted(
        &self,
        invitation_id: i32,
    ) -> Result<Option<agent_invitation::Model>, DbErr> {
        let invitation = match entity::prelude::AgentInvitation::find_by_id(invitation_id)
            .one(self.db)
            .await?
        {
            Some(invitation) => invitation,
            None => return Ok(None),
        };

        let mut invitation_am = invitation.into_active_model();
        invitation_am.status = ActiveValue::Set(InvitationStatus::Accepted);

        let invitation = invitation_am.update(self.db).await?;

        Ok(Some(invitation))
    }
}
