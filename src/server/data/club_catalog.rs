use chrono::Utc;
use entity::club_catalog;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ConnectionTrait, Condition, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct ClubCatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubCatalogRepository<'a, C> {
    /// Creates a new instance of [`ClubCatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user-proposed catalog entry; proposals always start unverified.
    pub async fn create(
        &self,
        official_name: String,
        short_name: Option<String>,
        country: Option<String>,
        city: Option<String>,
        logo_url: Option<String>,
    ) -> Result<club_catalog::Model, DbErr> {
        let club = club_catalog::ActiveModel {
            official_name: ActiveValue::Set(official_name),
            short_name: ActiveValue::Set(short_name),
            country: ActiveValue::Set(country),
            city: ActiveValue::Set(city),
            logo_url: ActiveValue::Set(logo_url),
            is_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        club.insert(self.db).await
    }

    /// Case-insensitive exact match on the official name.
    pub async fn find_by_name_exact(
        &self,
        name: &str,
    ) -> Result<Option<club_catalog::Model>, DbErr> {
        entity::prelude::ClubCatalog::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(club_catalog::Column::OfficialName)))
                    .eq(name.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Case-insensitive substring match on the official name, capped at `limit`.
    pub async fn find_by_name_fragment(
        &self,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<club_catalog::Model>, DbErr> {
        entity::prelude::ClubCatalog::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(club_catalog::Column::OfficialName)))
                    .like(format!("%{}%", fragment.to_lowercase())),
            )
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Autocomplete lookup over official and short names, verified entries first.
    pub async fn search(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<club_catalog::Model>, DbErr> {
        let pattern = format!("%{}%", query.to_lowercase());

        entity::prelude::ClubCatalog::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(club_catalog::Column::OfficialName)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(club_catalog::Column::ShortName)))
                            .like(pattern),
                    ),
            )
            .order_by_desc(club_catalog::Column::IsVerified)
            .order_by_asc(club_catalog::Column::OfficialName)
            .limit(limit)
            .all(self.db)
            .await
    }
}
