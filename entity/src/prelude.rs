pub use super::agent::Entity as Agent;
pub use super::agent_invitation::Entity as AgentInvitation;
pub use super::club_catalog::Entity as ClubCatalog;
pub use super::player::Entity as Player;
pub use super::user::Entity as User;
