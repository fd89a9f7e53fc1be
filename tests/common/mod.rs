use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use marketplace_backend::{
    database::repository::MarketplaceRepository,
    error::Result,
    models::{
        profile::{ProfileRow, VideoDemo},
        project::ProposalActivity,
    },
    AppState,
};
use rust_decimal::Decimal;
use sqlx::types::Json;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory marketplace used to drive the HTTP surface without Postgres.
#[derive(Default)]
pub struct FixtureRepository {
    pub profiles: Vec<ProfileRow>,
    pub proposals: Vec<ProposalActivity>,
    pub demos: Vec<VideoDemo>,
}

#[async_trait]
impl MarketplaceRepository for FixtureRepository {
    async fn freelancer_profiles(
        &self,
        _joined_since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ProfileRow>> {
        // The join-date pre-filter is left to the newcomer gate.
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.role == "freelancer")
            .cloned()
            .collect())
    }

    async fn proposal_activity(&self, user_ids: &[i64]) -> Result<Vec<ProposalActivity>> {
        Ok(self
            .proposals
            .iter()
            .filter(|p| user_ids.contains(&p.freelancer_id))
            .cloned()
            .collect())
    }

    async fn public_demo_counts(&self, profile_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        let mut counts = HashMap::new();
        for demo in self.demos.iter().filter(|d| d.is_public) {
            if profile_ids.contains(&demo.profile_id) {
                *counts.entry(demo.profile_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn list_profiles(&self, limit: i64, offset: i64) -> Result<Vec<ProfileRow>> {
        Ok(self
            .profiles
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_profiles(&self) -> Result<i64> {
        Ok(self.profiles.len() as i64)
    }

    async fn get_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>> {
        Ok(self
            .profiles
            .iter()
            .find(|p| p.profile_id == profile_id)
            .cloned())
    }

    async fn list_public_demos(&self, limit: i64) -> Result<Vec<VideoDemo>> {
        let mut demos: Vec<VideoDemo> = self.demos.iter().filter(|d| d.is_public).cloned().collect();
        demos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        demos.truncate(limit as usize);
        Ok(demos)
    }

    async fn get_public_demo(&self, demo_id: i64) -> Result<Option<VideoDemo>> {
        Ok(self
            .demos
            .iter()
            .find(|d| d.id == demo_id && d.is_public)
            .cloned())
    }
}

pub fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// A freelancer with a complete profile; callers blank fields as needed.
pub fn freelancer(user_id: i64, rating: Decimal, joined_days_ago: i64) -> ProfileRow {
    let joined = days_ago(joined_days_ago);
    ProfileRow {
        profile_id: 100 + user_id,
        user_id,
        email: format!("freelancer{}@example.com", user_id),
        name: format!("Freelancer {}", user_id),
        role: "freelancer".into(),
        date_joined: joined,
        headline: "Software engineer".into(),
        bio: "I build backends.".into(),
        skills: Json(vec!["Rust".into()]),
        hourly_rate: Some(dec(40, 0)),
        location: "Lisbon".into(),
        website: String::new(),
        avatar: Some(format!("avatars/{}/avatar.jpg", user_id)),
        rating,
        total_projects: 0,
        created_at: joined,
        updated_at: joined,
    }
}

pub fn proposal(freelancer_id: i64, project_status: &str, days: i64) -> ProposalActivity {
    ProposalActivity {
        freelancer_id,
        project_status: project_status.into(),
        created_at: days_ago(days),
    }
}

pub fn demo(id: i64, profile_id: i64, is_public: bool, days: i64) -> VideoDemo {
    VideoDemo {
        id,
        profile_id,
        profile_name: format!("Profile {}", profile_id),
        title: format!("Demo {}", id),
        description: String::new(),
        video_file: format!("videos/demo{}.mp4", id),
        thumbnail: None,
        category: "web-development".into(),
        tags: Json(vec!["api".into()]),
        is_public,
        created_at: days_ago(days),
    }
}

/// Seven freelancers and one client covering every gate:
///
/// * 1: 4.9 rating, four completed projects, active this month, two demos
/// * 2: 4.0 rating, two open proposals this month
/// * 3: 3.2 rating, two completed projects long ago
/// * 4: 5.0 rating, joined 10 days ago, no proposals
/// * 5: joined 5 days ago, bio and skills only
/// * 6: joined 120 days ago, no proposals
/// * 7: joined 3 days ago, skills only
pub fn marketplace() -> FixtureRepository {
    let mut profiles = vec![
        freelancer(1, dec(49, 1), 400),
        freelancer(2, dec(40, 1), 200),
        freelancer(3, dec(32, 1), 300),
        freelancer(4, dec(50, 1), 10),
    ];

    let mut sparse = freelancer(5, Decimal::ZERO, 5);
    sparse.hourly_rate = None;
    sparse.location = String::new();
    sparse.avatar = None;
    profiles.push(sparse);

    profiles.push(freelancer(6, Decimal::ZERO, 120));

    let mut skills_only = freelancer(7, Decimal::ZERO, 3);
    skills_only.bio = String::new();
    skills_only.hourly_rate = None;
    skills_only.location = String::new();
    skills_only.avatar = None;
    profiles.push(skills_only);

    let mut client = freelancer(8, dec(50, 1), 30);
    client.role = "client".into();
    profiles.push(client);

    let proposals = vec![
        proposal(1, "completed", 300),
        proposal(1, "completed", 200),
        proposal(1, "completed", 100),
        proposal(1, "completed", 60),
        proposal(1, "in_progress", 5),
        proposal(2, "open", 3),
        proposal(2, "open", 12),
        proposal(3, "completed", 200),
        proposal(3, "completed", 190),
        proposal(8, "completed", 1),
    ];

    let demos = vec![
        demo(1, 101, true, 20),
        demo(2, 101, true, 2),
        demo(3, 102, false, 1),
    ];

    FixtureRepository {
        profiles,
        proposals,
        demos,
    }
}

pub fn app_state(repository: FixtureRepository) -> AppState {
    AppState::new(Arc::new(repository))
}
