pub use sea_orm_migration::prelude::*;

mod m20260831_000001_user;
mod m20260831_000002_agent;
mod m20260831_000003_player;
mod m20260831_000004_agent_invitation;
mod m20260831_000005_club_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260831_000001_user::Migration),
            Box::new(m20260831_000002_agent::Migration),
            Box::new(m20260831_000003_player::Migration),
            Box::new(m20260831_000004_agent_invitation::Migration),
            Box::new(m20260831_000005_club_catalog::Migration),
        ]
    }
}
