use crate::database::repository::MarketplaceRepository;
use crate::error::Result;
use crate::models::profile::ProfileRow;
use crate::ranking::{aggregate, Leaderboard};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// A profile together with its position in a discovery list.
#[derive(Debug, Clone)]
pub struct RankedProfile {
    pub rank: usize,
    pub score: Decimal,
    pub profile: ProfileRow,
}

#[derive(Clone)]
pub struct RankingService {
    repository: Arc<dyn MarketplaceRepository>,
}

impl RankingService {
    pub fn new(repository: Arc<dyn MarketplaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn leaderboard(
        &self,
        board: Leaderboard,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedProfile>> {
        let profiles = self
            .repository
            .freelancer_profiles(board.joined_since(now))
            .await?;
        if profiles.is_empty() {
            tracing::info!(leaderboard = board.as_str(), "no freelancer profiles to rank");
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = profiles.iter().map(|p| p.user_id).collect();
        let profile_ids: Vec<i64> = profiles.iter().map(|p| p.profile_id).collect();
        let activity = self.repository.proposal_activity(&user_ids).await?;
        let demo_counts = self.repository.public_demo_counts(&profile_ids).await?;
        tracing::debug!(
            leaderboard = board.as_str(),
            candidates = profiles.len(),
            proposals = activity.len(),
            "aggregating candidate snapshots"
        );

        let snapshots = aggregate(&profiles, &activity, &demo_counts, now);
        let ranked = board.rank(&snapshots, now);

        let mut by_user: HashMap<i64, ProfileRow> =
            profiles.into_iter().map(|p| (p.user_id, p)).collect();
        let result: Vec<RankedProfile> = ranked
            .into_iter()
            .filter_map(|scored| {
                by_user
                    .remove(&scored.freelancer_id)
                    .map(|profile| RankedProfile {
                        rank: scored.rank,
                        score: scored.score,
                        profile,
                    })
            })
            .collect();

        tracing::debug!(
            leaderboard = board.as_str(),
            ranking = ?result
                .iter()
                .map(|r| (r.rank, r.profile.user_id, r.score))
                .collect::<Vec<_>>(),
            "ranked (rank, freelancer, score)"
        );
        tracing::info!(
            leaderboard = board.as_str(),
            eligible = result.len(),
            "leaderboard ranked"
        );
        Ok(result)
    }

    pub async fn top_rated(&self, now: DateTime<Utc>) -> Result<Vec<RankedProfile>> {
        self.leaderboard(Leaderboard::TopRated, now).await
    }

    pub async fn newcomers(&self, now: DateTime<Utc>) -> Result<Vec<RankedProfile>> {
        self.leaderboard(Leaderboard::Newcomers, now).await
    }

    pub async fn featured(&self, now: DateTime<Utc>) -> Result<Vec<RankedProfile>> {
        self.leaderboard(Leaderboard::Featured, now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::MockMarketplaceRepository;
    use crate::error::Error;
    use crate::models::project::ProposalActivity;
    use crate::ranking::scoring::points;
    use chrono::{Duration, TimeZone};
    use sqlx::types::Json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap()
    }

    fn profile(profile_id: i64, user_id: i64, rating: Decimal, joined_days_ago: i64) -> ProfileRow {
        let joined = now() - Duration::days(joined_days_ago);
        ProfileRow {
            profile_id,
            user_id,
            email: format!("f{}@example.com", user_id),
            name: format!("Freelancer {}", user_id),
            role: "freelancer".into(),
            date_joined: joined,
            headline: "Developer".into(),
            bio: "Ships things".into(),
            skills: Json(vec!["React".into(), "Python".into(), "SQL".into()]),
            hourly_rate: Some(points(45, 0)),
            location: "Remote".into(),
            website: String::new(),
            avatar: Some("avatars/1/avatar.jpg".into()),
            rating,
            total_projects: 0,
            created_at: joined,
            updated_at: joined,
        }
    }

    fn proposal(freelancer_id: i64, status: &str, days_ago: i64) -> ProposalActivity {
        ProposalActivity {
            freelancer_id,
            project_status: status.into(),
            created_at: now() - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn top_rated_orders_and_gates() {
        let mut repo = MockMarketplaceRepository::new();
        repo.expect_freelancer_profiles()
            .withf(|since| since.is_none())
            .returning(|_| {
                Ok(vec![
                    profile(10, 1, points(48, 1), 400),
                    profile(11, 2, points(40, 1), 400),
                    profile(12, 3, points(30, 1), 400),
                    profile(13, 4, points(50, 1), 400),
                ])
            });
        repo.expect_proposal_activity().returning(|ids| {
            assert_eq!(ids, &[1, 2, 3, 4]);
            Ok(vec![
                proposal(1, "completed", 3),
                proposal(1, "completed", 50),
                proposal(2, "open", 5),
                proposal(3, "completed", 5),
            ])
        });
        repo.expect_public_demo_counts()
            .returning(|_| Ok(HashMap::new()));

        let service = RankingService::new(Arc::new(repo));
        let ranked = service.top_rated(now()).await.unwrap();

        // user 3 is below the rating gate, user 4 has no proposals
        let users: Vec<i64> = ranked.iter().map(|r| r.profile.user_id).collect();
        assert_eq!(users, vec![1, 2]);
        assert_eq!(ranked[0].rank, 1);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[tokio::test]
    async fn newcomers_restrict_join_window() {
        let mut repo = MockMarketplaceRepository::new();
        repo.expect_freelancer_profiles()
            .withf(|since| *since == Some(now() - Duration::days(90)))
            .returning(|_| Ok(vec![profile(10, 1, Decimal::ZERO, 3)]));
        repo.expect_proposal_activity()
            .returning(|_| Ok(Vec::new()));
        repo.expect_public_demo_counts()
            .returning(|_| Ok(HashMap::new()));

        let service = RankingService::new(Arc::new(repo));
        let ranked = service.newcomers(now()).await.unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].profile.profile_id, 10);
    }

    #[tokio::test]
    async fn empty_pool_skips_follow_up_queries() {
        let mut repo = MockMarketplaceRepository::new();
        repo.expect_freelancer_profiles()
            .returning(|_| Ok(Vec::new()));
        repo.expect_proposal_activity().never();
        repo.expect_public_demo_counts().never();

        let service = RankingService::new(Arc::new(repo));
        assert!(service.featured(now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let mut repo = MockMarketplaceRepository::new();
        repo.expect_freelancer_profiles()
            .returning(|_| Err(Error::Internal("connection reset".into())));

        let service = RankingService::new(Arc::new(repo));
        let err = service.featured(now()).await.unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let build = || {
            let mut repo = MockMarketplaceRepository::new();
            repo.expect_freelancer_profiles().returning(|_| {
                Ok((1..=12)
                    .map(|i| profile(100 + i, i, points(45, 1), 200))
                    .collect())
            });
            repo.expect_proposal_activity()
                .returning(|ids| Ok(ids.iter().map(|id| proposal(*id, "in_progress", 10)).collect()));
            repo.expect_public_demo_counts()
                .returning(|_| Ok(HashMap::from([(101, 2)])));
            RankingService::new(Arc::new(repo))
        };

        let first = tokio_test::block_on(build().featured(now())).unwrap();
        let second = tokio_test::block_on(build().featured(now())).unwrap();
        let ids = |list: &[RankedProfile]| list.iter().map(|r| r.profile.user_id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.len(), 6);
        // the only profile with demos edges ahead; the rest tie and fall back to id
        assert_eq!(ids(&first), vec![1, 2, 3, 4, 5, 6]);
    }
}
