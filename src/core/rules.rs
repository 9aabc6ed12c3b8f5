use crate::models::{Listing, UserProfile, ScoringWeights, NO_PREFERENCE, MULTIPLE_LOCATIONS};

/// Sectors that earn a small demand bonus regardless of the user's interest
pub const HIGH_DEMAND_SECTORS: [&str; 3] = ["Technology", "Healthcare", "Environment"];

/// Which location rule fired for a listing
///
/// Exactly one applies per listing, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOutcome {
    Exact,
    NoPreference,
    Flexible,
    Mismatch,
}

impl LocationOutcome {
    /// An empty profile location never counts as an exact match
    pub fn evaluate(profile_location: &str, listing_location: &str) -> Self {
        if !profile_location.is_empty() && profile_location == listing_location {
            Self::Exact
        } else if profile_location == NO_PREFERENCE {
            Self::NoPreference
        } else if profile_location == MULTIPLE_LOCATIONS && listing_location != MULTIPLE_LOCATIONS {
            Self::Flexible
        } else {
            Self::Mismatch
        }
    }

    pub fn contribution(self, weights: &ScoringWeights) -> i32 {
        match self {
            Self::Exact => weights.location_exact,
            Self::NoPreference => weights.location_no_preference,
            Self::Flexible => weights.location_flexible,
            Self::Mismatch => weights.location_mismatch,
        }
    }

    /// Only an exact match is worth telling the user about
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Exact => Some("Perfect location match"),
            _ => None,
        }
    }
}

/// Shorthand for evaluating the location rule and returning its points
#[inline]
pub fn location_contribution(
    profile_location: &str,
    listing_location: &str,
    weights: &ScoringWeights,
) -> (LocationOutcome, i32) {
    let outcome = LocationOutcome::evaluate(profile_location, listing_location);
    (outcome, outcome.contribution(weights))
}

/// Skills the user has that the listing asks for, in the user's order
#[inline]
pub fn skill_overlap(profile: &UserProfile, listing: &Listing) -> Vec<String> {
    profile
        .skills
        .iter()
        .filter(|skill| listing.requires(skill))
        .cloned()
        .collect()
}

/// Human-readable summary of the matched skills
pub fn skills_reason(matched: &[String]) -> Option<String> {
    match matched.len() {
        0 => None,
        n if n > 2 => Some(format!("Skills: {} matches", n)),
        _ => Some(format!("Skills: {}", matched.join(", "))),
    }
}

#[inline]
pub fn sector_matches(interest: &str, sector: &str) -> bool {
    !interest.is_empty() && interest == sector
}

#[inline]
pub fn is_high_demand(sector: &str) -> bool {
    HIGH_DEMAND_SECTORS.contains(&sector)
}
