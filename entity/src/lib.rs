pub mod prelude;

pub mod agent;
pub mod agent_invitation;
pub mod club_catalog;
pub mod player;
pub mod user;
