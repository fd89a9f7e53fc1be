use super::featured::Featured;
use super::newcomer::{Newcomer, NEWCOMER_WINDOW_DAYS};
use super::snapshot::CandidateSnapshot;
use super::top_rated::TopRated;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A scoring variant with its eligibility gate, tie-breaks and list size.
pub trait RankingPolicy {
    fn limit(&self) -> usize;

    /// Candidates failing the gate are left out of the list, not scored at zero.
    fn is_eligible(&self, candidate: &CandidateSnapshot, now: DateTime<Utc>) -> bool;

    fn score(&self, candidate: &CandidateSnapshot, now: DateTime<Utc>) -> Decimal;

    /// Orders two candidates with equal scores; `Less` means `a` ranks first.
    fn tie_break(&self, a: &CandidateSnapshot, b: &CandidateSnapshot) -> Ordering;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub freelancer_id: i64,
    pub score: Decimal,
    pub rank: usize,
}

/// Filters, scores, sorts and truncates `candidates` according to `policy`.
pub fn rank<P>(
    policy: &P,
    candidates: &[CandidateSnapshot],
    now: DateTime<Utc>,
) -> Vec<ScoredCandidate>
where
    P: RankingPolicy + ?Sized,
{
    let mut scored: Vec<(&CandidateSnapshot, Decimal)> = candidates
        .iter()
        .filter(|c| policy.is_eligible(c, now))
        .map(|c| (c, policy.score(c, now)))
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| policy.tie_break(a, b))
            .then_with(|| a.freelancer_id.cmp(&b.freelancer_id))
    });
    scored.truncate(policy.limit());

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (candidate, score))| ScoredCandidate {
            freelancer_id: candidate.freelancer_id,
            score,
            rank: idx + 1,
        })
        .collect()
}

/// Higher rating first, then more completed projects.
pub(crate) fn by_rating_then_experience(a: &CandidateSnapshot, b: &CandidateSnapshot) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| b.completed_projects.cmp(&a.completed_projects))
}

/// The three discovery lists exposed under `/profiles/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    TopRated,
    Newcomers,
    Featured,
}

impl Leaderboard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Leaderboard::TopRated => "top_rated",
            Leaderboard::Newcomers => "newcomers",
            Leaderboard::Featured => "featured",
        }
    }

    /// Lower bound on join date worth fetching from storage, if any.
    pub fn joined_since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Leaderboard::Newcomers => Some(now - Duration::days(NEWCOMER_WINDOW_DAYS)),
            Leaderboard::TopRated | Leaderboard::Featured => None,
        }
    }

    pub fn rank(&self, candidates: &[CandidateSnapshot], now: DateTime<Utc>) -> Vec<ScoredCandidate> {
        match self {
            Leaderboard::TopRated => rank(&TopRated, candidates, now),
            Leaderboard::Newcomers => rank(&Newcomer, candidates, now),
            Leaderboard::Featured => rank(&Featured, candidates, now),
        }
    }
}
