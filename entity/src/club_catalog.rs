use sea_orm::entity::prelude::*;

/// Canonical, de-duplicated list of known clubs, shared across tenants.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club_catalog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub official_name: String,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
