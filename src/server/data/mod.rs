//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They
//! are generic over [`sea_orm::ConnectionTrait`] so the same repository can
//! run against the pooled connection or inside a transaction.

pub mod agent;
pub mod club_catalog;
pub mod invitation;
pub mod player;
pub mod user;
