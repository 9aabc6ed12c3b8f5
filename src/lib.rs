//! Intern Match - rule-based internship recommendation service
//!
//! This library scores a user's skills, sector interest and location against a
//! static catalog of internship listings and returns a short, explained
//! ranking. It also answers questions about the internship scheme through a
//! generative API with a keyword-based fallback.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, RankResult, score_listing, fallback_reply};
pub use crate::models::{Catalog, Listing, UserProfile, ScoredMatch, ScoringWeights, RecommendRequest, RecommendResponse};
