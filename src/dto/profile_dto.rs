use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::profile::{ProfileRow, VideoDemo};
use crate::services::profile_service::ProfilePage;
use crate::services::ranking_service::RankedProfile;

const MEDIA_PREFIX: &str = "/media/";

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ProfileListQuery {
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct DemoListQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Public profile representation. Ranking scores are never included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub user: UserSummary,
    pub headline: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub hourly_rate: Option<Decimal>,
    pub location: String,
    pub website: String,
    pub avatar: Option<String>,
    pub avatar_url: Option<String>,
    pub rating: Decimal,
    pub total_projects: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileListResponse {
    pub items: Vec<ProfileResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoDemoResponse {
    pub id: i64,
    pub profile: i64,
    pub profile_name: String,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

fn media_url(path: &str) -> String {
    format!("{}{}", MEDIA_PREFIX, path.trim_start_matches('/'))
}

impl From<ProfileRow> for ProfileResponse {
    fn from(value: ProfileRow) -> Self {
        let avatar_url = value
            .avatar
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(media_url);

        Self {
            id: value.profile_id,
            user: UserSummary {
                id: value.user_id,
                email: value.email,
                name: value.name,
                role: value.role,
            },
            headline: value.headline,
            bio: value.bio,
            skills: value.skills.0,
            hourly_rate: value.hourly_rate,
            location: value.location,
            website: value.website,
            avatar: value.avatar,
            avatar_url,
            rating: value.rating,
            total_projects: value.total_projects,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<RankedProfile> for ProfileResponse {
    fn from(value: RankedProfile) -> Self {
        value.profile.into()
    }
}

impl From<ProfilePage> for ProfileListResponse {
    fn from(value: ProfilePage) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}

impl From<VideoDemo> for VideoDemoResponse {
    fn from(value: VideoDemo) -> Self {
        Self {
            id: value.id,
            profile: value.profile_id,
            profile_name: value.profile_name,
            title: value.title,
            description: value.description,
            video_file: media_url(&value.video_file),
            thumbnail: value.thumbnail.as_deref().map(media_url),
            category: value.category,
            tags: value.tags.0,
            is_public: value.is_public,
            created_at: value.created_at,
        }
    }
}
