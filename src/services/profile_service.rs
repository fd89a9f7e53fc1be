use crate::database::repository::MarketplaceRepository;
use crate::dto::profile_dto::{DemoListQuery, ProfileListQuery};
use crate::error::{Error, Result};
use crate::models::profile::{ProfileRow, VideoDemo};
use std::sync::Arc;

const DEFAULT_PER_PAGE: i64 = 20;
const MAX_PER_PAGE: i64 = 100;
const DEFAULT_DEMO_LIMIT: i64 = 20;

#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn MarketplaceRepository>,
}

pub struct ProfilePage {
    pub items: Vec<ProfileRow>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn MarketplaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ProfileListQuery) -> Result<ProfilePage> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        let offset = (page - 1)
            .checked_mul(per_page)
            .ok_or_else(|| Error::BadRequest(format!("page {} is out of range", page)))?;

        let items = self.repository.list_profiles(per_page, offset).await?;
        let total = self.repository.count_profiles().await?;
        let total_pages = (total + per_page - 1) / per_page;

        Ok(ProfilePage {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get(&self, profile_id: i64) -> Result<ProfileRow> {
        self.repository
            .get_profile(profile_id)
            .await?
            .ok_or_else(|| Error::NotFound("Profile not found".into()))
    }

    pub async fn list_public_demos(&self, query: &DemoListQuery) -> Result<Vec<VideoDemo>> {
        let limit = match query.limit {
            Some(limit) if limit > 0 => limit.min(MAX_PER_PAGE),
            _ => DEFAULT_DEMO_LIMIT,
        };
        self.repository.list_public_demos(limit).await
    }

    pub async fn get_public_demo(&self, demo_id: i64) -> Result<VideoDemo> {
        self.repository
            .get_public_demo(demo_id)
            .await?
            .ok_or_else(|| Error::NotFound("Demo not found".into()))
    }
}
