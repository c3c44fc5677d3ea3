//! Club catalog proposals and the duplicate matcher.
//!
//! Proposed names are checked against existing entries in two stages: a cheap
//! case-insensitive exact match, then a fuzzy pass over candidates sharing
//! the name's prefix. Candidate prefiltering keeps the fuzzy comparison off
//! the full table; entries whose names differ within the first few characters
//! are not caught, which is accepted for an operator-curated catalog.

use entity::club_catalog;
use sea_orm::DatabaseConnection;

use crate::{
    model::club::ProposeClubDto,
    server::{
        data::club_catalog::ClubCatalogRepository,
        error::{catalog::CatalogError, Error},
    },
};

/// Proposals scoring strictly above this against any candidate are rejected.
const NEAR_DUPLICATE_THRESHOLD: f64 = 0.8;
/// Prefix length used to prefilter fuzzy-match candidates.
const CANDIDATE_PREFIX_LENGTH: usize = 3;
/// Cap on candidates fetched for the fuzzy pass.
const CANDIDATE_FETCH_LIMIT: u64 = 50;
/// Cap on autocomplete results.
const SEARCH_RESULT_LIMIT: u64 = 10;
/// Queries shorter than this return no results instead of scanning the table.
const MIN_SEARCH_QUERY_LENGTH: usize = 2;

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Accepts a user-proposed club unless it duplicates an existing entry.
    ///
    /// An exact name match (ignoring case) or a near match above the
    /// similarity threshold is rejected with the offending name(s) so the
    /// proposer can pick the existing entry instead. Accepted proposals are
    /// stored unverified until an operator reviews them.
    pub async fn propose(&self, dto: ProposeClubDto) -> Result<club_catalog::Model, Error> {
        let catalog_repo = ClubCatalogRepository::new(self.db);

        if let Some(existing) = catalog_repo.find_by_name_exact(&dto.name).await? {
            return Err(CatalogError::ExactDuplicate(existing.official_name).into());
        }

        let prefix: String = dto
            .name
            .to_lowercase()
            .chars()
            .take(CANDIDATE_PREFIX_LENGTH)
            .collect();
        let candidates = catalog_repo
            .find_by_name_fragment(&prefix, CANDIDATE_FETCH_LIMIT)
            .await?;

        let near_matches: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| {
                similarity(&dto.name, &candidate.official_name) > NEAR_DUPLICATE_THRESHOLD
            })
            .map(|candidate| candidate.official_name)
            .collect();

        if !near_matches.is_empty() {
            return Err(CatalogError::NearDuplicates(near_matches.join(", ")).into());
        }

        let club = catalog_repo
            .create(dto.name, dto.short_name, dto.country, dto.city, dto.logo_url)
            .await?;

        tracing::info!(
            club_id = club.id,
            "Accepted unverified catalog proposal {:?}",
            club.official_name
        );

        Ok(club)
    }

    /// Autocomplete search over official and short names.
    ///
    /// Verified entries sort first. Queries below the minimum length return
    /// an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<club_catalog::Model>, Error> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_QUERY_LENGTH {
            return Ok(Vec::new());
        }

        let clubs = ClubCatalogRepository::new(self.db)
            .search(query, SEARCH_RESULT_LIMIT)
            .await?;

        Ok(clubs)
    }
}

/// Case-insensitive name similarity in `[0.0, 1.0]`, where `1.0` means the
/// names are equal up to casing.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}
