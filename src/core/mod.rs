// Core algorithm exports
pub mod fallback;
pub mod ranker;
pub mod rules;
pub mod scoring;

pub use fallback::{fallback_reply, FallbackCategory};
pub use ranker::{Ranker, RankResult, MIN_SCORE, TOP_K};
pub use rules::{location_contribution, skill_overlap, LocationOutcome, HIGH_DEMAND_SECTORS};
pub use scoring::{score_listing, ListingScore, MAX_REASONS};
