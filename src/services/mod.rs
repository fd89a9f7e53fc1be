pub mod profile_service;
pub mod ranking_service;
