// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Catalog, Listing, UserProfile, ScoredMatch, ScoringWeights, NO_PREFERENCE, MULTIPLE_LOCATIONS};
pub use requests::{
    RecommendRequest, ChatRequest, MAX_SKILLS, MESSAGE_LENGTH_MESSAGE, NO_SKILLS_MESSAGE,
    TOO_MANY_SKILLS_MESSAGE,
};
pub use responses::{RecommendResponse, ChatResponse, ReplySource, HealthResponse, ErrorResponse};
