use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use entity::{
    agent,
    player::{self, RepresentationStatus},
    user::UserRole,
};
use rand::{distr::Alphanumeric, Rng};
use rand_core::OsRng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::registration::{RegistrationDto, RepresentationModeDto},
    server::{
        data::{
            agent::AgentRepository, invitation::InvitationRepository, player::PlayerRepository,
            user::UserRepository,
        },
        error::{registration::RegistrationError, Error},
        service::{
            agent::generate_unique_slug,
            invitation::InvitationService,
            representation::{transition, RepresentationEvent},
        },
    },
};

const INVITATION_TOKEN_LENGTH: usize = 40;

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    public_url: &'a str,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection, public_url: &'a str) -> Self {
        Self { db, public_url }
    }

    /// Registers a player account and resolves their representation intent.
    ///
    /// The user row, player row and any invitation row are written in one
    /// transaction; a failure along the way leaves no partial account behind.
    ///
    /// Depending on the payload the new player lands in one of three states:
    /// - no agent claimed: `FreeAgent`
    /// - claimed an existing agent by id: `PendingConfirmation`
    /// - named an unregistered agent by email: `PendingInvitation`, with a
    ///   pending invitation row for that email
    pub async fn register_player(&self, dto: RegistrationDto) -> Result<player::Model, Error> {
        if UserRepository::new(self.db)
            .get_by_email(&dto.email)
            .await?
            .is_some()
        {
            return Err(RegistrationError::EmailTaken(dto.email).into());
        }

        let password_hash = hash_password(&dto.password)?;
        let public_url = self.public_url.to_string();

        let player = self
            .db
            .transaction::<_, player::Model, Error>(move |txn| {
                Box::pin(async move {
                    let user = UserRepository::new(txn)
                        .create(
                            &dto.email,
                            password_hash,
                            UserRole::Player,
                            dto.first_name.clone(),
                            dto.last_name.clone(),
                        )
                        .await?;

                    let player_repo = PlayerRepository::new(txn);
                    let first_name = dto.first_name.unwrap_or_default();
                    let last_name = dto.last_name.unwrap_or_default();

                    let represented = dto.representation_mode
                        == Some(RepresentationModeDto::Represented);

                    if !represented {
                        let status = transition(
                            RepresentationStatus::FreeAgent,
                            RepresentationEvent::RegisterFree,
                        )?;
                        let player = player_repo
                            .create(Some(user.id), None, first_name, last_name, status)
                            .await?;

                        return Ok(player);
                    }

                    let agent_data = dto
                        .agent_data
                        .ok_or(RegistrationError::MissingAgentData)?;

                    if let Some(agent_id) = agent_data.id {
                        let agent = AgentRepository::new(txn)
                            .get_by_id(agent_id)
                            .await?
                            .ok_or(RegistrationError::AgentNotFound(agent_id))?;

                        let status = transition(
                            RepresentationStatus::FreeAgent,
                            RepresentationEvent::ClaimAgent,
                        )?;
                        let player = player_repo
                            .create(Some(user.id), Some(agent.id), first_name, last_name, status)
                            .await?;

                        Ok(player)
                    } else if let Some(agent_email) = agent_data.email {
                        let status = transition(
                            RepresentationStatus::FreeAgent,
                            RepresentationEvent::RequestInvitation,
                        )?;
                        let player = player_repo
                            .create(Some(user.id), None, first_name, last_name, status)
                            .await?;

                        let invitation = InvitationRepository::new(txn)
                            .create(
                                player.id,
                                &agent_email,
                                agent_data.name,
                                generate_invitation_token(),
                            )
                            .await?;

                        // Mail delivery is handled out of band; the accept
                        // link is logged so it shows up in development.
                        tracing::info!(
                            player_id = player.id,
                            target_email = %invitation.target_email,
                            "Issued agent invitation: {}/invitations/accept/{}",
                            public_url,
                            invitation.token
                        );

                        Ok(player)
                    } else {
                        Err(RegistrationError::MissingAgentData.into())
                    }
                })
            })
            .await?;

        Ok(player)
    }

    /// Registers an agent account with a unique agency slug.
    ///
    /// Pending invitations addressed to the new agent's email are resolved in
    /// the same transaction, linking any players who named this agent before
    /// they signed up.
    pub async fn register_agent(&self, dto: RegistrationDto) -> Result<agent::Model, Error> {
        if UserRepository::new(self.db)
            .get_by_email(&dto.email)
            .await?
            .is_some()
        {
            return Err(RegistrationError::EmailTaken(dto.email).into());
        }

        let password_hash = hash_password(&dto.password)?;

        let agent = self
            .db
            .transaction::<_, agent::Model, Error>(move |txn| {
                Box::pin(async move {
                    let user = UserRepository::new(txn)
                        .create(
                            &dto.email,
                            password_hash,
                            UserRole::Agent,
                            dto.first_name,
                            dto.last_name,
                        )
                        .await?;

                    let agency_name = dto
                        .agency_name
                        .unwrap_or_else(|| email_local_part(&user.email).to_string());
                    let slug = generate_unique_slug(txn, &agency_name).await?;

                    let agent = AgentRepository::new(txn)
                        .create(user.id, agency_name, slug)
                        .await?;

                    InvitationService::new(txn)
                        .accept_pending_for_email(&agent, &user.email)
                        .await?;

                    Ok(agent)
                })
            })
            .await?;

        Ok(agent)
    }
}

fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Invitation tokens are unguessable URL path segments, drawn from the
/// thread-local CSPRNG.
fn generate_invitation_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(INVITATION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
