use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260831_000001_user::User, m20260831_000002_agent::Agent};

static IDX_PLAYER_AGENT_ID: &str = "idx-player-agent_id";
static FK_PLAYER_USER_ID: &str = "fk-player-user_id";
static FK_PLAYER_AGENT_ID: &str = "fk-player-agent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer_null(Player::UserId).unique_key().to_owned())
                    .col(integer_null(Player::AgentId))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(
                        string_len(Player::RepresentationStatus, 24)
                            .default("free_agent")
                            .to_owned(),
                    )
                    .col(timestamp(Player::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_AGENT_ID)
                    .table(Player::Table)
                    .col(Player::AgentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_USER_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_AGENT_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::AgentId)
                    .to_tbl(Agent::Table)
                    .to_col(Agent::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_AGENT_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_USER_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_AGENT_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    UserId,
    AgentId,
    FirstName,
    LastName,
    RepresentationStatus,
    CreatedAt,
}
