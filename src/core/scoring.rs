use crate::models::{Listing, UserProfile, ScoringWeights};
use crate::core::rules::{is_high_demand, location_contribution, sector_matches, skill_overlap, skills_reason};

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 2;

/// Score of a single listing together with the rules that explain it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingScore {
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Score a listing for a profile
///
/// Scoring formula:
/// score = (
///     skill * matched_skills +     # every shared skill counts
///     sector (interest == sector) +
///     exactly one location rule +  # exact, no preference, flexible, mismatch
///     high_demand (sector bonus)
/// )
///
/// Reasons are collected in that order and truncated to [`MAX_REASONS`].
pub fn score_listing(
    profile: &UserProfile,
    listing: &Listing,
    weights: &ScoringWeights,
) -> ListingScore {
    let mut score = 0;
    let mut reasons = Vec::with_capacity(3);

    // Skills
    let matched = skill_overlap(profile, listing);
    score += weights.skill * matched.len() as i32;
    if let Some(reason) = skills_reason(&matched) {
        reasons.push(reason);
    }

    // Sector
    if sector_matches(&profile.interest, &listing.sector) {
        score += weights.sector;
        reasons.push(format!("Sector: {}", listing.sector));
    }

    // Location
    let (outcome, points) = location_contribution(&profile.location, &listing.location, weights);
    score += points;
    if let Some(reason) = outcome.reason() {
        reasons.push(reason.to_string());
    }

    // High-demand bonus
    if is_high_demand(&listing.sector) {
        score += weights.high_demand;
    }

    reasons.truncate(MAX_REASONS);

    ListingScore { score, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_listing(skills: &[&str], sector: &str, location: &str) -> Listing {
        Listing {
            id: None,
            title: "Test Internship".to_string(),
            company: Some("Test Co".to_string()),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            sector: sector.to_string(),
            location: location.to_string(),
            description: None,
            duration: None,
            stipend: None,
        }
    }

    fn create_profile() -> UserProfile {
        UserProfile::new(["Python", "Data Analysis"], "Technology", "Remote")
    }

    #[test]
    fn test_full_match_score() {
        let listing = create_listing(&["Python"], "Technology", "Remote");
        let result = score_listing(&create_profile(), &listing, &ScoringWeights::default());

        assert_eq!(result.score, 43);
        assert_eq!(result.reasons, vec!["Skills: Python", "Sector: Technology"]);
    }

    #[test]
    fn test_no_match_score() {
        let listing = create_listing(&["Excel"], "Finance", "Urban");
        let result = score_listing(&create_profile(), &listing, &ScoringWeights::default());

        assert_eq!(result.score, -1);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_location_reason_kept_when_room() {
        let listing = create_listing(&["Excel"], "Finance", "Remote");
        let result = score_listing(&create_profile(), &listing, &ScoringWeights::default());

        assert_eq!(result.score, 10);
        assert_eq!(result.reasons, vec!["Perfect location match"]);
    }

    #[test]
    fn test_many_skills_summarised() {
        let profile = UserProfile::new(["Python", "SQL", "Excel"], "", "Urban");
        let listing = create_listing(&["Excel", "SQL", "Python"], "Finance", "Remote");
        let result = score_listing(&profile, &listing, &ScoringWeights::default());

        assert_eq!(result.score, 36 - 1);
        assert_eq!(result.reasons, vec!["Skills: 3 matches"]);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            skill: 10,
            sector: 8,
            location_exact: 5,
            location_no_preference: 5,
            location_flexible: 0,
            location_mismatch: -3,
            high_demand: 0,
        };
        let listing = create_listing(&["Python"], "Technology", "Remote");
        let result = score_listing(&create_profile(), &listing, &weights);

        assert_eq!(result.score, 23);
    }
}
