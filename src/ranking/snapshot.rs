use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Everything the scoring policies know about one freelancer.
///
/// Built fresh for every ranking request and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSnapshot {
    pub freelancer_id: i64,
    pub rating: Decimal,
    pub hourly_rate: Option<Decimal>,
    pub has_bio: bool,
    pub has_location: bool,
    pub has_avatar: bool,
    pub skills: Vec<String>,
    pub join_date: DateTime<Utc>,
    pub total_proposals: u32,
    pub completed_projects: u32,
    pub accepted_or_active_proposals: u32,
    pub recent_proposals_30d: u32,
    pub recent_proposals_90d: u32,
    pub early_proposals_7d_post_join: u32,
    pub public_demo_count: u32,
}

/// Converts a database count into a counter, flooring negatives at zero.
pub fn counter(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
