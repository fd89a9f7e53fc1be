use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A profile joined with its owning account.
///
/// This is the single row shape read for both the profile endpoints and the
/// ranking engine, so the ranked lists can be serialized without a second
/// round trip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub profile_id: i64,
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub date_joined: DateTime<Utc>,
    pub headline: String,
    pub bio: String,
    pub skills: Json<Vec<String>>,
    pub hourly_rate: Option<Decimal>,
    pub location: String,
    pub website: String,
    pub avatar: Option<String>,
    pub rating: Decimal,
    pub total_projects: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    pub fn has_avatar(&self) -> bool {
        self.avatar.as_deref().is_some_and(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VideoDemo {
    pub id: i64,
    pub profile_id: i64,
    pub profile_name: String,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub tags: Json<Vec<String>>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}
