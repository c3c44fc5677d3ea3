use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    pub id: i32,
    pub official_name: String,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
    pub is_verified: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposeClubDto {
    pub name: String,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
}

impl From<entity::club_catalog::Model> for ClubDto {
    fn from(club: entity::club_catalog::Model) -> Self {
        Self {
            id: club.id,
            official_name: club.official_name,
            short_name: club.short_name,
            country: club.country,
            city: club.city,
            logo_url: club.logo_url,
            is_verified: club.is_verified,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::IntoParams, utoipa::ToSchema)]
pub struct ClubSearchParams {
    pub query: String,
}
