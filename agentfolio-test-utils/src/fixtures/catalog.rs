use chrono::Utc;
use entity::club_catalog;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Inserts club catalog fixture rows
pub struct CatalogFactory<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_club(
        &self,
        official_name: &str,
        is_verified: bool,
    ) -> Result<club_catalog::Model, TestError> {
        let club = club_catalog::ActiveModel {
            official_name: ActiveValue::Set(official_name.to_string()),
            short_name: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(is_verified),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(club.insert(self.db).await?)
    }

    pub async fn insert_club_with_short_name(
        &self,
        official_name: &str,
        short_name: &str,
        is_verified: bool,
    ) -> Result<club_catalog::Model, TestError> {
        let club = club_catalog::ActiveModel {
            official_name: ActiveValue::Set(official_name.to_string()),
            short_name: ActiveValue::Set(Some(short_name.to_string())),
            country: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(is_verified),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(club.insert(self.db).await?)
    }
}
