use entity::agent;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{agent::AgentRepository, user::UserRepository},
    error::{registration::RegistrationError, Error},
    service::invitation::InvitationService,
};

pub struct AgentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgentService<'a> {
    /// Creates a new instance of [`AgentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an agent profile for an existing user account.
    ///
    /// This is the path for users who registered as players (or without a
    /// profile) and later become agents. Any pending invitations addressed to
    /// the user's email are resolved in the same transaction.
    pub async fn create_agent_for_user(
        &self,
        user_id: i32,
        agency_name: String,
    ) -> Result<agent::Model, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(RegistrationError::UserNotFound(user_id))?;

        if AgentRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(RegistrationError::AgentProfileExists(user_id).into());
        }

        let agent = self
            .db
            .transaction::<_, agent::Model, Error>(move |txn| {
                Box::pin(async move {
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

/// Derives a unique URL slug from an agency name, appending `-2`, `-3`, ...
/// until a free one is found.
pub async fn generate_unique_slug<C: ConnectionTrait>(
    db: &C,
    base: &str,
) -> Result<String, DbErr> {
    let agent_repo = AgentRepository::new(db);
    let base = slugify(base);

    if !agent_repo.slug_exists(&base).await? {
        return Ok(base);
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !agent_repo.slug_exists(&candidate).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}

/// Lowercases and replaces runs of non-alphanumeric characters with a single
/// dash, trimming dashes at both ends. Falls back to `"agent"` for input with
/// no usable characters.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("agent");
    }

    slug
}

#[cfg(test)]
mod tests {

    mod slugify {
        use crate::server::service::agent::slugify;

        /// Expect lowercasing and dash separation
        #[test]
        fn normalizes_agency_names() {
            assert_eq!(slugify("Prime Sports"), "prime-sports");
            assert_eq!(slugify("  Top! Talent & Co.  "), "top-talent-co");
            assert_eq!(slugify("agency42"), "agency42");
        }

        /// Expect a fallback slug for names with no usable characters
        #[test]
        fn falls_back_for_empty_input() {
            assert_eq!(slugify("!!!"), "agent");
            assert_eq!(slugify(""), "agent");
        }
    }

    mod generate_unique_slug {
        use agentfolio_test_utils::prelude::*;

        use crate::server::service::agent::generate_unique_slug;

        /// Expect the base slug when it is free
        #[tokio::test]
        async fn uses_base_slug_when_free() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let slug = generate_unique_slug(&test.db, "Prime Sports").await?;

            assert_eq!(slug, "prime-sports");

            Ok(())
        }

        /// Expect numeric suffixes when the base slug is taken
        #[tokio::test]
        async fn appends_suffix_for_taken_slug() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            test.accounts()
                .insert_agent("one@example.com", "Prime Sports", "prime-sports")
                .await?;
            test.accounts()
                .insert_agent("two@example.com", "Prime Sports", "prime-sports-2")
                .await?;

            let slug = generate_unique_slug(&test.db, "Prime Sports").await?;

            assert_eq!(slug, "prime-sports-3");

            Ok(())
        }
    }

    mod create_agent_for_user {
        use agentfolio_test_utils::prelude::*;
        use entity::{player::RepresentationStatus, user::UserRole};
        use sea_orm::EntityTrait;

        use crate::server::{error::Error, service::agent::AgentService};

        /// Expect an agent profile for an existing user
        #[tokio::test]
        async fn creates_agent_profile() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test
                .accounts()
                .insert_user("agent@example.com", UserRole::Agent)
                .await?;

            let agent_service = AgentService::new(&test.db);
            let agent = agent_service
                .create_agent_for_user(user.id, "Prime Sports".to_string())
                .await
                .unwrap();

            assert_eq!(agent.user_id, user.id);
            assert_eq!(agent.slug, "prime-sports");

            Ok(())
        }

        /// Expect pending invitations for the user's email to be resolved
        #[tokio::test]
        async fn resolves_pending_invitations() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test
                .accounts()
                .insert_user("agent@example.com", UserRole::Agent)
                .await?;
            let player = test
                .accounts()
                .insert_player(None, None, RepresentationStatus::PendingInvitation)
                .await?;
            test.accounts()
                .insert_pending_invitation(player.id, "agent@example.com", "tok-1")
                .await?;

            let agent_service = AgentService::new(&test.db);
            let agent = agent_service
                .create_agent_for_user(user.id, "Prime Sports".to_string())
                .await
                .unwrap();

            let player = entity::prelude::Player::find_by_id(player.id)
                .one(&test.db)
                .await?
                .unwrap();
            assert_eq!(
                player.representation_status,
                RepresentationStatus::PendingConfirmation
            );
            assert_eq!(player.agent_id, Some(agent.id));

            Ok(())
        }

        /// Expect Error when the user does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let agent_service = AgentService::new(&test.db);
            let result = agent_service
                .create_agent_for_user(42, "Prime Sports".to_string())
                .await;

            assert!(matches!(result, Err(Error::RegistrationError(_))));

            Ok(())
        }

        /// Expect Error when the user already owns an agent profile
        #[tokio::test]
        async fn fails_for_existing_profile() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let (user, _) = test
                .accounts()
                .insert_agent("agent@example.com", "Prime Sports", "prime-sports")
                .await?;

            let agent_service = AgentService::new(&test.db);
            let result = agent_service
                .create_agent_for_user(user.id, "Second Agency".to_string())
                .await;

            assert!(matches!(result, Err(Error::RegistrationError(_))));

            Ok(())
        }
    }
}
