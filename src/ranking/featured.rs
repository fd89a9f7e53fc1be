//! A balanced mix of proven performers and in-demand rising talent.

use super::leaderboard::{by_rating_then_experience, RankingPolicy};
use super::scoring::{
    capped_points, completeness_points, completion_rate, points, profile_completeness,
    rating_points, step_points, success_rate, weighted, PERCENT,
};
use super::snapshot::CandidateSnapshot;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Matched case-insensitively as substrings of the candidate's skills.
pub const HIGH_DEMAND_SKILLS: [&str; 4] = ["react", "python", "javascript", "design"];

// Overall performance
const RATING_WEIGHT: Decimal = points(12, 0);
const SUCCESS_WEIGHT: Decimal = points(105, 1);
const EXPERIENCE_CAP: u32 = 5;
const EXPERIENCE_PER_PROJECT: Decimal = points(15, 1);

// Market demand
const PER_DEMANDED_SKILL: Decimal = points(5, 0);
const BUDGET_RATE_CEILING: Decimal = points(50, 0);
const MID_RATE_CEILING: Decimal = points(100, 0);
const BUDGET_RATE_POINTS: Decimal = points(10, 0);
const MID_RATE_POINTS: Decimal = points(75, 1);
const PREMIUM_RATE_POINTS: Decimal = points(5, 0);
const SKILL_DIVERSITY_STEPS: [(u32, Decimal); 2] = [(5, points(10, 0)), (3, points(5, 0))];

// Reliability
const COMPLETION_WEIGHT: Decimal = points(10, 0);
const CONSISTENCY_STEPS: [(u32, Decimal); 2] = [(3, points(10, 0)), (1, points(5, 0))];

// Professional presence
const PRESENCE_WEIGHT: Decimal = points(10, 0);
const PORTFOLIO_STEPS: [(u32, Decimal); 2] = [(2, points(5, 0)), (1, points(25, 1))];

// Client satisfaction
const RECENT_DEMAND_STEPS: [(u32, Decimal); 2] = [(2, points(10, 0)), (1, points(5, 0))];

const MIN_RATING: Decimal = points(3, 0);
const MIN_PROPOSALS: u32 = 1;
const MIN_COMPLETENESS: u32 = 60;
const LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedBreakdown {
    pub rating: Decimal,
    pub success_rate: Decimal,
    pub experience: Decimal,
    pub skill_demand: Decimal,
    pub pricing: Decimal,
    pub skill_diversity: Decimal,
    pub completion_rate: Decimal,
    pub consistent_activity: Decimal,
    pub profile_completeness: Decimal,
    pub portfolio: Decimal,
    pub recent_demand: Decimal,
}

impl FeaturedBreakdown {
    pub fn performance(&self) -> Decimal {
        self.rating + self.success_rate + self.experience
    }

    pub fn market_demand(&self) -> Decimal {
        self.skill_demand + self.pricing + self.skill_diversity
    }

    pub fn reliability(&self) -> Decimal {
        self.completion_rate + self.consistent_activity
    }

    pub fn presence(&self) -> Decimal {
        self.profile_completeness + self.portfolio
    }

    pub fn client_satisfaction(&self) -> Decimal {
        self.recent_demand
    }

    pub fn total(&self) -> Decimal {
        self.performance()
            + self.market_demand()
            + self.reliability()
            + self.presence()
            + self.client_satisfaction()
    }
}

/// Number of [`HIGH_DEMAND_SKILLS`] found anywhere in the skills text.
pub fn high_demand_skill_count(skills: &[String]) -> u32 {
    let text = skills.join("\n").to_lowercase();
    HIGH_DEMAND_SKILLS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count() as u32
}

fn pricing_points(hourly_rate: Option<Decimal>) -> Decimal {
    match hourly_rate {
        None => Decimal::ZERO,
        Some(rate) if rate <= BUDGET_RATE_CEILING => BUDGET_RATE_POINTS,
        Some(rate) if rate <= MID_RATE_CEILING => MID_RATE_POINTS,
        Some(_) => PREMIUM_RATE_POINTS,
    }
}

pub fn breakdown(candidate: &CandidateSnapshot) -> FeaturedBreakdown {
    FeaturedBreakdown {
        rating: rating_points(candidate, RATING_WEIGHT),
        success_rate: weighted(success_rate(candidate), PERCENT, SUCCESS_WEIGHT),
        experience: capped_points(
            candidate.completed_projects,
            EXPERIENCE_CAP,
            EXPERIENCE_PER_PROJECT,
        ),
        skill_demand: Decimal::from(high_demand_skill_count(&candidate.skills))
            * PER_DEMANDED_SKILL,
        pricing: pricing_points(candidate.hourly_rate),
        skill_diversity: step_points(candidate.skills.len() as u32, &SKILL_DIVERSITY_STEPS),
        completion_rate: weighted(completion_rate(candidate), PERCENT, COMPLETION_WEIGHT),
        consistent_activity: step_points(candidate.recent_proposals_90d, &CONSISTENCY_STEPS),
        profile_completeness: completeness_points(candidate, PRESENCE_WEIGHT),
        portfolio: step_points(candidate.public_demo_count, &PORTFOLIO_STEPS),
        recent_demand: step_points(candidate.recent_proposals_30d, &RECENT_DEMAND_STEPS),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Featured;

impl RankingPolicy for Featured {
    fn limit(&self) -> usize {
        LIMIT
    }

    fn is_eligible(&self, candidate: &CandidateSnapshot, _now: DateTime<Utc>) -> bool {
        candidate.rating >= MIN_RATING
            && candidate.total_proposals >= MIN_PROPOSALS
            && profile_completeness(candidate) >= MIN_COMPLETENESS
    }

    fn score(&self, candidate: &CandidateSnapshot, _now: DateTime<Utc>) -> Decimal {
        breakdown(candidate).total()
    }

    fn tie_break(&self, a: &CandidateSnapshot, b: &CandidateSnapshot) -> Ordering {
        by_rating_then_experience(a, b)
    }
}
