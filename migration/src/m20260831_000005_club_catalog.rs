use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLUB_CATALOG_OFFICIAL_NAME: &str = "idx-club_catalog-official_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubCatalog::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubCatalog::Id))
                    .col(string(ClubCatalog::OfficialName))
                    .col(string_null(ClubCatalog::ShortName))
                    .col(string_null(ClubCatalog::Country))
                    .col(string_null(ClubCatalog::City))
                    .col(string_null(ClubCatalog::LogoUrl))
                    .col(boolean(ClubCatalog::IsVerified).default(false).to_owned())
                    .col(timestamp(ClubCatalog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLUB_CATALOG_OFFICIAL_NAME)
                    .table(ClubCatalog::Table)
                    .col(ClubCatalog::OfficialName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLUB_CATALOG_OFFICIAL_NAME)
                    .table(ClubCatalog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClubCatalog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ClubCatalog {
    Table,
    Id,
    OfficialName,
    ShortName,
    Country,
    City,
    LogoUrl,
    IsVerified,
    CreatedAt,
}
