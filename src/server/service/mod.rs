//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and implement the two core pieces of
//! domain logic: the player representation lifecycle (registration, agent
//! invitations, roster actions) and the club catalog deduplication matcher.

pub mod agent;
pub mod catalog;
pub mod invitation;
pub mod registration;
pub mod representation;
pub mod roster;
