use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260831_000003_player::Player;

static IDX_AGENT_INVITATION_TARGET_EMAIL: &str = "idx-agent_invitation-target_email";
static FK_AGENT_INVITATION_PLAYER_ID: &str = "fk-agent_invitation-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(AgentInvitation::Id))
                    .col(integer(AgentInvitation::PlayerId))
                    .col(string(AgentInvitation::TargetEmail))
                    .col(string_null(AgentInvitation::TargetName))
                    .col(string_uniq(AgentInvitation::Token))
                    .col(
                        string_len(AgentInvitation::Status, 16)
                            .default("pending")
                            .to_owned(),
                    )
                    .col(timestamp(AgentInvitation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AGENT_INVITATION_TARGET_EMAIL)
                    .table(AgentInvitation::Table)
                    .col(AgentInvitation::TargetEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AGENT_INVITATION_PLAYER_ID)
                    .from_tbl(AgentInvitation::Table)
                    .from_col(AgentInvitation::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
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
                    .name(FK_AGENT_INVITATION_PLAYER_ID)
                    .table(AgentInvitation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AGENT_INVITATION_TARGET_EMAIL)
                    .table(AgentInvitation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AgentInvitation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AgentInvitation {
    Table,
    Id,
    PlayerId,
    TargetEmail,
    TargetName,
    Token,
    Status,
    CreatedAt,
}
