use super::scoring::clamped_rating;
use super::snapshot::{counter, CandidateSnapshot};
use crate::models::profile::ProfileRow;
use crate::models::project::{ProjectStatus, ProposalActivity};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
struct ActivityCounters {
    total: u32,
    completed: u32,
    accepted_or_active: u32,
    recent_30d: u32,
    recent_90d: u32,
    early_7d: u32,
}

/// Builds one snapshot per profile from raw proposal and portfolio rows.
///
/// `demo_counts` is keyed by profile id; proposal rows are keyed by the
/// freelancer's user id. Rows for freelancers not in `profiles` are ignored.
pub fn aggregate(
    profiles: &[ProfileRow],
    activity: &[ProposalActivity],
    demo_counts: &HashMap<i64, i64>,
    now: DateTime<Utc>,
) -> Vec<CandidateSnapshot> {
    let join_dates: HashMap<i64, DateTime<Utc>> = profiles
        .iter()
        .map(|p| (p.user_id, p.date_joined))
        .collect();

    let thirty_days_ago = now - Duration::days(30);
    let ninety_days_ago = now - Duration::days(90);
    let mut counters: HashMap<i64, ActivityCounters> = HashMap::new();

    for proposal in activity {
        let Some(joined) = join_dates.get(&proposal.freelancer_id) else {
            continue;
        };
        let entry = counters.entry(proposal.freelancer_id).or_default();
        entry.total += 1;

        if let Some(status) = proposal.project_status() {
            if status == ProjectStatus::Completed {
                entry.completed += 1;
            }
            if status.is_accepted_or_active() {
                entry.accepted_or_active += 1;
            }
        }
        if proposal.created_at >= thirty_days_ago {
            entry.recent_30d += 1;
        }
        if proposal.created_at >= ninety_days_ago {
            entry.recent_90d += 1;
        }
        if proposal.created_at <= *joined + Duration::days(7) {
            entry.early_7d += 1;
        }
    }

    profiles
        .iter()
        .map(|profile| {
            let c = counters.get(&profile.user_id).copied().unwrap_or_default();
            CandidateSnapshot {
                freelancer_id: profile.user_id,
                rating: clamped_rating(profile.rating),
                hourly_rate: profile.hourly_rate,
                has_bio: !profile.bio.is_empty(),
                has_location: !profile.location.is_empty(),
                has_avatar: profile.has_avatar(),
                skills: profile.skills.0.clone(),
                join_date: profile.date_joined,
                total_proposals: c.total,
                completed_projects: c.completed,
                accepted_or_active_proposals: c.accepted_or_active,
                recent_proposals_30d: c.recent_30d,
                recent_proposals_90d: c.recent_90d,
                early_proposals_7d_post_join: c.early_7d,
                public_demo_count: counter(
                    demo_counts.get(&profile.profile_id).copied().unwrap_or(0),
                ),
            }
        })
        .collect()
}
