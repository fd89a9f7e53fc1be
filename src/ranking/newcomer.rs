//! Recently joined freelancers who got off to a good start.

use super::leaderboard::RankingPolicy;
use super::scoring::{completeness_points, points, profile_completeness, step_points};
use super::snapshot::CandidateSnapshot;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Only accounts younger than this are newcomers.
pub const NEWCOMER_WINDOW_DAYS: i64 = 90;

/// Days-since-join upper bounds and their recency points; older gets the floor.
const RECENCY_STEPS: [(i64, Decimal); 3] = [
    (7, points(30, 0)),
    (30, points(25, 0)),
    (60, points(15, 0)),
];
const RECENCY_FLOOR: Decimal = points(5, 0);

const EARLY_ACTIVITY_STEPS: [(u32, Decimal); 2] = [(3, points(25, 0)), (1, points(15, 0))];
const ANY_PROPOSAL_POINTS: Decimal = points(10, 0);

const PROFILE_WEIGHT: Decimal = points(25, 0);

const ACCEPTED_POINTS: Decimal = points(20, 0);
const PROPOSAL_VOLUME_STEPS: [(u32, Decimal); 2] = [(3, points(10, 0)), (1, points(5, 0))];

const MIN_COMPLETENESS: u32 = 40;
const LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewcomerBreakdown {
    pub recency: Decimal,
    pub early_activity: Decimal,
    pub profile_quality: Decimal,
    pub initial_success: Decimal,
}

impl NewcomerBreakdown {
    pub fn total(&self) -> Decimal {
        self.recency + self.early_activity + self.profile_quality + self.initial_success
    }
}

fn recency_points(join_date: DateTime<Utc>, now: DateTime<Utc>) -> Decimal {
    let age = now - join_date;
    RECENCY_STEPS
        .iter()
        .find(|(days, _)| age <= Duration::days(*days))
        .map(|(_, pts)| *pts)
        .unwrap_or(RECENCY_FLOOR)
}

fn early_activity_points(candidate: &CandidateSnapshot) -> Decimal {
    if candidate.early_proposals_7d_post_join > 0 {
        step_points(candidate.early_proposals_7d_post_join, &EARLY_ACTIVITY_STEPS)
    } else if candidate.total_proposals > 0 {
        ANY_PROPOSAL_POINTS
    } else {
        Decimal::ZERO
    }
}

fn initial_success_points(candidate: &CandidateSnapshot) -> Decimal {
    if candidate.accepted_or_active_proposals > 0 {
        ACCEPTED_POINTS
    } else {
        step_points(candidate.total_proposals, &PROPOSAL_VOLUME_STEPS)
    }
}

pub fn breakdown(candidate: &CandidateSnapshot, now: DateTime<Utc>) -> NewcomerBreakdown {
    NewcomerBreakdown {
        recency: recency_points(candidate.join_date, now),
        early_activity: early_activity_points(candidate),
        profile_quality: completeness_points(candidate, PROFILE_WEIGHT),
        initial_success: initial_success_points(candidate),
    }
}

pub fn joined_recently(candidate: &CandidateSnapshot, now: DateTime<Utc>) -> bool {
    candidate.join_date >= now - Duration::days(NEWCOMER_WINDOW_DAYS)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Newcomer;

impl RankingPolicy for Newcomer {
    fn limit(&self) -> usize {
        LIMIT
    }

    fn is_eligible(&self, candidate: &CandidateSnapshot, now: DateTime<Utc>) -> bool {
        joined_recently(candidate, now) && profile_completeness(candidate) >= MIN_COMPLETENESS
    }

    fn score(&self, candidate: &CandidateSnapshot, now: DateTime<Utc>) -> Decimal {
        breakdown(candidate, now).total()
    }

    fn tie_break(&self, a: &CandidateSnapshot, b: &CandidateSnapshot) -> Ordering {
        b.join_date.cmp(&a.join_date)
    }
}
