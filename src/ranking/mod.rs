//! Freelancer discovery ranking.
//!
//! Raw profile, proposal and portfolio rows are folded into one
//! [`CandidateSnapshot`] per freelancer, scored by one of three policies and
//! cut down to a short ranked list. Everything here is synchronous and free of
//! I/O; the data is fetched by `services::ranking_service`.

pub mod aggregator;
pub mod featured;
pub mod leaderboard;
pub mod newcomer;
pub mod scoring;
pub mod snapshot;
pub mod top_rated;

pub use aggregator::aggregate;
pub use leaderboard::{rank, Leaderboard, RankingPolicy, ScoredCandidate};
pub use snapshot::CandidateSnapshot;
