use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserProfile;

/// Shown when a recommendation request arrives without skills
pub const NO_SKILLS_MESSAGE: &str = "Please select at least one skill";

/// Upper bound on skills accepted in one recommendation request
pub const MAX_SKILLS: usize = 100;

/// Shown when a recommendation request lists more than `MAX_SKILLS` skills
pub const TOO_MANY_SKILLS_MESSAGE: &str = "Please select at most 100 skills";

/// Shown when a chat message is outside the accepted length
pub const MESSAGE_LENGTH_MESSAGE: &str = "Message must be between 1 and 2000 characters";

/// Request to rank internships for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1, max = 100, message = "Please select between 1 and 100 skills"))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl RecommendRequest {
    /// Sector the user picked. A single `interest` wins over the first of `interests`.
    pub fn selected_interest(&self) -> &str {
        self.interest
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .or_else(|| self.interests.iter().map(String::as_str).find(|i| !i.trim().is_empty()))
            .unwrap_or("")
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile::new(
            &self.skills,
            self.selected_interest(),
            self.location.as_deref().unwrap_or(""),
        )
    }
}

/// Free-text question for the chat assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,
}
