use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260831_000001_user::User;

static FK_AGENT_USER_ID: &str = "fk-agent-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agent::Table)
                    .if_not_exists()
                    .col(pk_auto(Agent::Id))
                    .col(integer_uniq(Agent::UserId))
                    .col(string(Agent::AgencyName))
                    .col(string_uniq(Agent::Slug))
                    .col(timestamp(Agent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AGENT_USER_ID)
                    .from_tbl(Agent::Table)
                    .from_col(Agent::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AGENT_USER_ID)
                    .table(Agent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Agent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Agent {
    Table,
    Id,
    UserId,
    AgencyName,
    Slug,
    CreatedAt,
}
