use entity::agent;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{invitation::InvitationRepository, player::PlayerRepository},
    error::Error,
    service::representation::{transition, RepresentationEvent},
};

/// Resolves pending invitations when an agent account appears for their email.
///
/// Generic over the connection so both call sites (agent registration and
/// standalone agent creation) can run it inside their own transaction.
pub struct InvitationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationService<'a, C> {
    /// Creates a new instance of [`InvitationService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Accepts every pending invitation addressed to `email` on behalf of the
    /// newly created agent and links the inviting players.
    ///
    /// Accepted players land in `PendingConfirmation`: the agent still has to
    /// confirm each representation explicitly. The pending-status filter makes
    /// a rerun with nothing left to accept a no-op.
    ///
    /// # Returns
    /// The number of invitations accepted.
    pub async fn accept_pending_for_email(
        &self,
        agent: &agent::Model,
        email: &str,
    ) -> Result<u64, Error> {
        let invitation_repo = InvitationRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);

        let pending = invitation_repo.get_pending_by_email(email).await?;
        let mut accepted = 0;

        for invitation in pending {
            invitation_repo.mark_accepted(invitation.id).await?;
            accepted += 1;

            let player = match player_repo.get_by_id(invitation.player_id).await? {
                Some(player) => player,
                None => continue,
            };

            match transition(
                player.representation_status,
                RepresentationEvent::AcceptInvitation,
            ) {
                Ok(status) => {
                    player_repo
                        .update_representation(player.id, status, Some(agent.id))
                        .await?;
                }
                Err(err) => {
                    // The invitation outlived the player's pending state, e.g.
                    // the player released the claim before the agent signed up.
                    tracing::warn!(
                        invitation_id = invitation.id,
                        player_id = player.id,
                        "Consumed invitation without linking player: {}",
                        err
                    );
                }
            }
        }

        Ok(accepted)
    }
}
