use crate::error::Result;
use crate::models::profile::{ProfileRow, VideoDemo};
use crate::models::project::ProposalActivity;
use crate::models::user::UserRole;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;

/// Read-only access to the marketplace tables used by profile discovery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    /// Profiles of freelancer accounts, optionally only those joined on or
    /// after `joined_since`.
    async fn freelancer_profiles(
        &self,
        joined_since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProfileRow>>;

    async fn proposal_activity(&self, user_ids: &[i64]) -> Result<Vec<ProposalActivity>>;

    /// Public demo count per profile id. Profiles without demos are absent.
    async fn public_demo_counts(&self, profile_ids: &[i64]) -> Result<HashMap<i64, i64>>;

    async fn list_profiles(&self, limit: i64, offset: i64) -> Result<Vec<ProfileRow>>;

    async fn count_profiles(&self) -> Result<i64>;

    async fn get_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>>;

    async fn list_public_demos(&self, limit: i64) -> Result<Vec<VideoDemo>>;

    async fn get_public_demo(&self, demo_id: i64) -> Result<Option<VideoDemo>>;
}

const PROFILE_COLUMNS: &str = r#"
    pr.id AS profile_id, u.id AS user_id, u.email, u.name, u.role, u.date_joined,
    pr.headline, pr.bio, pr.skills, pr.hourly_rate, pr.location, pr.website,
    pr.avatar, pr.rating, pr.total_projects, pr.created_at, pr.updated_at
"#;

const DEMO_COLUMNS: &str = r#"
    d.id, d.profile_id, u.name AS profile_name, d.title, d.description,
    d.video_file, d.thumbnail, d.category, d.tags, d.is_public, d.created_at
"#;

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarketplaceRepository for PgRepository {
    async fn freelancer_profiles(
        &self,
        joined_since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProfileRow>> {
        let query = format!(
            "SELECT {}
             FROM profiles pr
             JOIN users u ON u.id = pr.user_id
             WHERE u.role = $1
               AND ($2::timestamptz IS NULL OR u.date_joined >= $2)
             ORDER BY pr.id",
            PROFILE_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(UserRole::Freelancer.as_str())
            .bind(joined_since)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn proposal_activity(&self, user_ids: &[i64]) -> Result<Vec<ProposalActivity>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, ProposalActivity>(
            r#"
            SELECT pp.freelancer_id, p.status AS project_status, pp.created_at
            FROM project_proposals pp
            JOIN projects p ON p.id = pp.project_id
            WHERE pp.freelancer_id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn public_demo_counts(&self, profile_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        if profile_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT profile_id, COUNT(*)
            FROM video_demos
            WHERE is_public AND profile_id = ANY($1)
            GROUP BY profile_id
            "#,
        )
        .bind(profile_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    async fn list_profiles(&self, limit: i64, offset: i64) -> Result<Vec<ProfileRow>> {
        let query = format!(
            "SELECT {}
             FROM profiles pr
             JOIN users u ON u.id = pr.user_id
             ORDER BY pr.created_at DESC, pr.id DESC
             LIMIT $1 OFFSET $2",
            PROFILE_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_profiles(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn get_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>> {
        let query = format!(
            "SELECT {}
             FROM profiles pr
             JOIN users u ON u.id = pr.user_id
             WHERE pr.id = $1",
            PROFILE_COLUMNS
        );
        let row = sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_public_demos(&self, limit: i64) -> Result<Vec<VideoDemo>> {
        let query = format!(
            "SELECT {}
             FROM video_demos d
             JOIN profiles pr ON pr.id = d.profile_id
             JOIN users u ON u.id = pr.user_id
             WHERE d.is_public
             ORDER BY d.created_at DESC, d.id DESC
             LIMIT $1",
            DEMO_COLUMNS
        );
        let rows = sqlx::query_as::<_, VideoDemo>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_public_demo(&self, demo_id: i64) -> Result<Option<VideoDemo>> {
        let query = format!(
            "SELECT {}
             FROM video_demos d
             JOIN profiles pr ON pr.id = d.profile_id
             JOIN users u ON u.id = pr.user_id
             WHERE d.id = $1 AND d.is_public",
            DEMO_COLUMNS
        );
        let row = sqlx::query_as::<_, VideoDemo>(&query)
            .bind(demo_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
