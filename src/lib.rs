pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod services;
pub mod utils;

use crate::database::repository::MarketplaceRepository;
use crate::services::{profile_service::ProfileService, ranking_service::RankingService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub ranking_service: RankingService,
}

impl AppState {
    pub fn new(repository: Arc<dyn MarketplaceRepository>) -> Self {
        let profile_service = ProfileService::new(repository.clone());
        let ranking_service = RankingService::new(repository);

        Self {
            profile_service,
            ranking_service,
        }
    }
}
