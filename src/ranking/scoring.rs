//! Sub-scores shared by every ranking policy.

use super::snapshot::CandidateSnapshot;
use rust_decimal::Decimal;

pub const MAX_RATING: Decimal = points(5, 0);
pub const PERCENT: Decimal = points(100, 0);

/// Points awarded for each populated profile field.
const COMPLETENESS_STEP: u32 = 20;

/// Builds a non-negative decimal `units * 10^-scale` at compile time.
pub const fn points(units: u32, scale: u32) -> Decimal {
    Decimal::from_parts(units, 0, 0, false, scale)
}

pub fn clamped_rating(rating: Decimal) -> Decimal {
    rating.clamp(Decimal::ZERO, MAX_RATING)
}

/// 20 points for each of bio, skills, hourly rate, location and avatar.
pub fn profile_completeness(candidate: &CandidateSnapshot) -> u32 {
    let present = [
        candidate.has_bio,
        !candidate.skills.is_empty(),
        candidate.hourly_rate.is_some(),
        candidate.has_location,
        candidate.has_avatar,
    ]
    .into_iter()
    .filter(|field| *field)
    .count() as u32;
    present * COMPLETENESS_STEP
}

/// `part / whole * 100`, or zero when `whole` is zero. Capped at 100.
pub fn percentage(part: u32, whole: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * PERCENT / Decimal::from(whole)).min(PERCENT)
}

pub fn success_rate(candidate: &CandidateSnapshot) -> Decimal {
    percentage(
        candidate.accepted_or_active_proposals,
        candidate.total_proposals,
    )
}

pub fn completion_rate(candidate: &CandidateSnapshot) -> Decimal {
    percentage(
        candidate.completed_projects,
        candidate.accepted_or_active_proposals,
    )
}

/// Scales `value` out of `max` onto a `weight`-point allocation.
pub fn weighted(value: Decimal, max: Decimal, weight: Decimal) -> Decimal {
    if max.is_zero() {
        return Decimal::ZERO;
    }
    value / max * weight
}

pub fn rating_points(candidate: &CandidateSnapshot, weight: Decimal) -> Decimal {
    weighted(clamped_rating(candidate.rating), MAX_RATING, weight)
}

pub fn completeness_points(candidate: &CandidateSnapshot, weight: Decimal) -> Decimal {
    weighted(
        Decimal::from(profile_completeness(candidate)),
        PERCENT,
        weight,
    )
}

/// `min(count, cap) * per_item`.
pub fn capped_points(count: u32, cap: u32, per_item: Decimal) -> Decimal {
    Decimal::from(count.min(cap)) * per_item
}

/// Returns the points of the first `(threshold, points)` step that `count`
/// reaches. Steps must be ordered from the highest threshold down.
pub fn step_points(count: u32, steps: &[(u32, Decimal)]) -> Decimal {
    steps
        .iter()
        .find(|(threshold, _)| count >= *threshold)
        .map(|(_, pts)| *pts)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> CandidateSnapshot {
        CandidateSnapshot {
            has_bio: true,
            has_location: true,
            has_avatar: true,
            hourly_rate: Some(points(45, 0)),
            skills: vec!["rust".into()],
            ..Default::default()
        }
    }

    #[test]
    fn completeness_counts_each_field() {
        assert_eq!(profile_completeness(&CandidateSnapshot::default()), 0);
        assert_eq!(profile_completeness(&full_profile()), 100);

        let no_avatar = CandidateSnapshot {
            has_avatar: false,
            ..full_profile()
        };
        assert_eq!(profile_completeness(&no_avatar), 80);
    }

    #[test]
    fn zero_proposals_yield_zero_rates() {
        let c = CandidateSnapshot::default();
        assert_eq!(success_rate(&c), Decimal::ZERO);
        assert_eq!(completion_rate(&c), Decimal::ZERO);
    }

    #[test]
    fn rates_divide_counters() {
        let c = CandidateSnapshot {
            total_proposals: 4,
            accepted_or_active_proposals: 2,
            completed_projects: 1,
            ..Default::default()
        };
        assert_eq!(success_rate(&c), points(50, 0));
        assert_eq!(completion_rate(&c), points(50, 0));
    }

    #[test]
    fn malformed_counters_cannot_exceed_full_rate() {
        let c = CandidateSnapshot {
            total_proposals: 1,
            accepted_or_active_proposals: 3,
            ..Default::default()
        };
        assert_eq!(success_rate(&c), PERCENT);
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(clamped_rating(points(72, 1)), MAX_RATING);
        assert_eq!(clamped_rating(-points(1, 0)), Decimal::ZERO);
        assert_eq!(clamped_rating(points(42, 1)), points(42, 1));
    }

    #[test]
    fn step_points_picks_first_reached_threshold() {
        let steps = [(3, points(10, 0)), (1, points(5, 0))];
        assert_eq!(step_points(4, &steps), points(10, 0));
        assert_eq!(step_points(1, &steps), points(5, 0));
        assert_eq!(step_points(0, &steps), Decimal::ZERO);
    }

    #[test]
    fn weighted_guards_zero_max() {
        assert_eq!(weighted(points(3, 0), Decimal::ZERO, points(10, 0)), Decimal::ZERO);
    }
}
