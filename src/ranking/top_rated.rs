//! Established freelancers: rating, delivered work and hit rate.

use super::leaderboard::{by_rating_then_experience, RankingPolicy};
use super::scoring::{
    capped_points, completeness_points, points, rating_points, step_points, success_rate,
    weighted, PERCENT,
};
use super::snapshot::CandidateSnapshot;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;

const RATING_WEIGHT: Decimal = points(40, 0);
const EXPERIENCE_CAP: u32 = 10;
const EXPERIENCE_PER_PROJECT: Decimal = points(25, 1);
const SUCCESS_WEIGHT: Decimal = points(20, 0);
const RECENT_ACTIVITY_POINTS: Decimal = points(10, 0);
const COMPLETENESS_WEIGHT: Decimal = points(5, 0);

const MIN_RATING: Decimal = points(35, 1);
const MIN_PROPOSALS: u32 = 1;
const LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopRatedBreakdown {
    pub rating: Decimal,
    pub experience: Decimal,
    pub success_rate: Decimal,
    pub recent_activity: Decimal,
    pub profile_completeness: Decimal,
}

impl TopRatedBreakdown {
    pub fn total(&self) -> Decimal {
        self.rating
            + self.experience
            + self.success_rate
            + self.recent_activity
            + self.profile_completeness
    }
}

pub fn breakdown(candidate: &CandidateSnapshot) -> TopRatedBreakdown {
    TopRatedBreakdown {
        rating: rating_points(candidate, RATING_WEIGHT),
        experience: capped_points(
            candidate.completed_projects,
            EXPERIENCE_CAP,
            EXPERIENCE_PER_PROJECT,
        ),
        success_rate: weighted(success_rate(candidate), PERCENT, SUCCESS_WEIGHT),
        recent_activity: step_points(
            candidate.recent_proposals_30d,
            &[(1, RECENT_ACTIVITY_POINTS)],
        ),
        profile_completeness: completeness_points(candidate, COMPLETENESS_WEIGHT),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TopRated;

impl RankingPolicy for TopRated {
    fn limit(&self) -> usize {
        LIMIT
    }

    fn is_eligible(&self, candidate: &CandidateSnapshot, _now: DateTime<Utc>) -> bool {
        candidate.rating >= MIN_RATING && candidate.total_proposals >= MIN_PROPOSALS
    }

    fn score(&self, candidate: &CandidateSnapshot, _now: DateTime<Utc>) -> Decimal {
        breakdown(candidate).total()
    }

    fn tie_break(&self, a: &CandidateSnapshot, b: &CandidateSnapshot) -> Ordering {
        by_rating_then_experience(a, b)
    }
}
